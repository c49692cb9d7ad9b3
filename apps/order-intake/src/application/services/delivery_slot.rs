//! Latest-request-wins slot.
//!
//! Holds the result of the most recent request for a key. Every new request
//! supersedes the previous one; a result is only accepted when it answers the
//! request that is still current. Nothing is cancelled: stale results are
//! simply refused on arrival.

/// Ticket returned by [`LatestRequestSlot::issue`] and redeemed by
/// [`LatestRequestSlot::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken<K> {
    key: K,
    generation: u64,
}

impl<K> RequestToken<K> {
    /// Key captured when the request was issued.
    pub const fn key(&self) -> &K {
        &self.key
    }
}

/// Single-slot cache where the latest request wins.
#[derive(Debug)]
pub struct LatestRequestSlot<K, V> {
    generation: u64,
    current: Option<K>,
    value: Option<V>,
    pending: bool,
}

impl<K, V> Default for LatestRequestSlot<K, V> {
    fn default() -> Self {
        Self {
            generation: 0,
            current: None,
            value: None,
            pending: false,
        }
    }
}

impl<K, V> LatestRequestSlot<K, V>
where
    K: Clone + PartialEq,
{
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `key`, superseding any request in flight and
    /// clearing the stored value.
    pub fn issue(&mut self, key: K) -> RequestToken<K> {
        self.generation += 1;
        self.current = Some(key.clone());
        self.value = None;
        self.pending = true;
        RequestToken {
            key,
            generation: self.generation,
        }
    }

    /// Forget the current request and value without starting a new one.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.current = None;
        self.value = None;
        self.pending = false;
    }

    /// Store `value` if `token` is still the current request.
    ///
    /// Returns false (and drops `value`) when the request was superseded.
    pub fn resolve(&mut self, token: RequestToken<K>, value: V) -> bool {
        let is_current = self.is_current(&token);
        if is_current {
            self.value = Some(value);
            self.pending = false;
        }
        is_current
    }

    /// Give up on `token` without a value.
    ///
    /// Only the current, still pending request is affected; returns whether
    /// anything changed.
    pub fn abandon(&mut self, token: &RequestToken<K>) -> bool {
        let abandoned = self.pending && self.is_current(token);
        if abandoned {
            self.pending = false;
        }
        abandoned
    }

    fn is_current(&self, token: &RequestToken<K>) -> bool {
        token.generation == self.generation && self.current.as_ref() == Some(&token.key)
    }

    /// Value for the current key, once resolved.
    pub const fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Whether the current request has not resolved yet.
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_current_request() {
        let mut slot = LatestRequestSlot::new();
        let token = slot.issue("400001");
        assert!(slot.is_pending());

        assert!(slot.resolve(token, true));
        assert_eq!(slot.value(), Some(&true));
        assert!(!slot.is_pending());
    }

    #[test]
    fn later_request_supersedes_earlier() {
        let mut slot = LatestRequestSlot::new();
        let first = slot.issue("400001");
        let second = slot.issue("400002");

        assert!(slot.resolve(second, "second"));
        assert!(!slot.resolve(first, "first"));
        assert_eq!(slot.value(), Some(&"second"));
    }

    #[test]
    fn stale_result_arriving_first_is_refused() {
        let mut slot = LatestRequestSlot::new();
        let first = slot.issue("400001");
        let second = slot.issue("400002");

        assert!(!slot.resolve(first, 1));
        assert!(slot.is_pending());
        assert_eq!(slot.value(), None);

        assert!(slot.resolve(second, 2));
        assert_eq!(slot.value(), Some(&2));
    }

    #[test]
    fn reissuing_same_key_still_supersedes() {
        let mut slot = LatestRequestSlot::new();
        let first = slot.issue("400001");
        slot.invalidate();
        let second = slot.issue("400001");

        assert!(!slot.resolve(first, "old"));
        assert!(slot.resolve(second, "new"));
        assert_eq!(slot.value(), Some(&"new"));
    }

    #[test]
    fn invalidate_clears_everything() {
        let mut slot = LatestRequestSlot::new();
        let token = slot.issue("400001");
        slot.invalidate();

        assert!(!slot.is_pending());
        assert!(!slot.resolve(token, ()));
        assert_eq!(slot.value(), None);
    }

    #[test]
    fn abandon_clears_pending_for_current_request() {
        let mut slot: LatestRequestSlot<&str, bool> = LatestRequestSlot::new();
        let token = slot.issue("110001");

        assert!(slot.abandon(&token));
        assert!(!slot.is_pending());
        assert_eq!(slot.value(), None);
        // Already abandoned
        assert!(!slot.abandon(&token));
    }

    #[test]
    fn abandon_leaves_newer_request_alone() {
        let mut slot: LatestRequestSlot<&str, bool> = LatestRequestSlot::new();
        let first = slot.issue("400001");
        let second = slot.issue("400002");

        assert!(!slot.abandon(&first));
        assert!(slot.is_pending());
        assert!(slot.resolve(second, true));
    }

    #[test]
    fn abandon_after_resolve_keeps_value() {
        let mut slot = LatestRequestSlot::new();
        let token = slot.issue("400001");
        assert!(slot.resolve(token.clone(), 7));

        assert!(!slot.abandon(&token));
        assert_eq!(slot.value(), Some(&7));
    }
}
