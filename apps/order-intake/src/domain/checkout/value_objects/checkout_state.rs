//! Checkout session state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutState {
    /// Fields are being edited; no usable delivery estimate yet.
    #[default]
    Editing,
    /// A delivery check for the current pincode is in flight.
    AwaitingDeliveryCheck,
    /// The current pincode is serviceable; the order may be placed.
    ReadyToSubmit,
    /// The order is with the backend.
    Submitting,
    /// The order was placed. Terminal until the session is reset.
    Confirmed,
    /// The backend refused the order. Transient: the session settles back
    /// to an editable state straight away.
    Failed,
}

impl CheckoutState {
    /// Whether this is the terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    /// Whether form fields may be edited.
    #[must_use]
    pub const fn accepts_edits(&self) -> bool {
        !matches!(self, Self::Confirmed)
    }

    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Editing => "EDITING",
            Self::AwaitingDeliveryCheck => "AWAITING_DELIVERY_CHECK",
            Self::ReadyToSubmit => "READY_TO_SUBMIT",
            Self::Submitting => "SUBMITTING",
            Self::Confirmed => "CONFIRMED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
