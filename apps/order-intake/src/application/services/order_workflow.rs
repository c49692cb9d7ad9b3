//! Checkout Session Service
//!
//! One customer's path from custom text to a placed order. The session owns
//! the working state (text, customer details, latest delivery estimate) and
//! drives the checkout state machine as edits arrive and async calls resolve.
//!
//! All methods take `&self`: a delivery check may be in flight while further
//! edits come in. The state lock is never held across an await; each async
//! operation snapshots what it needs, releases the lock, awaits, then
//! re-acquires the lock to apply the result.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::application::dto::OrderSummaryDto;
use crate::application::ports::{DeliveryCheckPort, OrderBackend};
use crate::application::services::delivery_slot::{LatestRequestSlot, RequestToken};
use crate::application::use_cases::{
    CheckDeliveryUseCase, GENERIC_FAILURE_MESSAGE, SubmitOrderUseCase,
    ValidateCustomizationUseCase,
};
use crate::config::{Config, ConfigError, validate_config};
use crate::domain::checkout::{
    CheckoutFailure, CheckoutState, CheckoutStateMachine, ContactField, CustomerInfo,
    OrderConfirmation, OrderRequest, OrderValidator,
};
use crate::domain::customization::{CustomText, TextSanitizer};
use crate::domain::delivery::{DeliveryEstimate, PostalCode};
use crate::domain::shared::{DomainError, Money};
use crate::observability::{record_delivery_superseded, record_validation_rejection};

/// Tunables of a checkout session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Text limits.
    pub sanitizer: TextSanitizer,
    /// Price of one plate.
    pub unit_price: Money,
    /// Plates per order.
    pub quantity: u32,
    /// Delay of the "proceed to checkout" step.
    pub validation_delay: Duration,
    /// Longest wait for a delivery check.
    pub delivery_check_timeout: Duration,
    /// Longest wait for an order submission.
    pub submission_timeout: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            sanitizer: TextSanitizer::default_limits(),
            unit_price: config.catalog.unit_price(),
            quantity: config.catalog.quantity,
            validation_delay: config.simulation.validation_latency(),
            delivery_check_timeout: config.workflow.delivery_check_timeout(),
            submission_timeout: config.workflow.submission_timeout(),
        }
    }
}

impl TryFrom<&Config> for SessionSettings {
    type Error = ConfigError;

    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        validate_config(config)?;
        Ok(Self {
            sanitizer: config.catalog.sanitizer()?,
            unit_price: config.catalog.unit_price(),
            quantity: config.catalog.quantity,
            validation_delay: config.simulation.validation_latency(),
            delivery_check_timeout: config.workflow.delivery_check_timeout(),
            submission_timeout: config.workflow.submission_timeout(),
        })
    }
}

/// What happened to a pincode edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryCheckOutcome {
    /// The pincode is not six characters long; no check ran.
    Skipped,
    /// A newer edit replaced this pincode before its check finished; the
    /// result was discarded.
    Superseded,
    /// The check finished for the current pincode. `None` means the check
    /// itself failed, which blocks checkout like an unserviceable pincode.
    Resolved(Option<DeliveryEstimate>),
}

/// Mutable state of one session.
#[derive(Debug, Default)]
struct SessionState {
    state: CheckoutState,
    custom_text: CustomText,
    customer: CustomerInfo,
    delivery: LatestRequestSlot<PostalCode, Option<DeliveryEstimate>>,
    confirmation: Option<OrderConfirmation>,
    last_failure: Option<CheckoutFailure>,
}

impl SessionState {
    fn transition(&mut self, to: CheckoutState) -> Result<(), DomainError> {
        CheckoutStateMachine::validate_transition(self.state, to)?;
        tracing::debug!(from = %self.state, to = %to, "Checkout state transition");
        self.state = to;
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), CheckoutFailure> {
        if self.state.accepts_edits() {
            return Ok(());
        }
        Err(CheckoutFailure::IllegalTransition(
            DomainError::InvalidStateTransition {
                entity: "CheckoutSession".to_string(),
                from: self.state.to_string(),
                to: CheckoutState::Editing.to_string(),
                reason: "Order is already placed, reset the session before editing".to_string(),
            },
        ))
    }

    /// Estimate for the current pincode, if its check has resolved.
    fn current_estimate(&self) -> Option<&DeliveryEstimate> {
        if self.delivery.is_pending() {
            return None;
        }
        self.delivery.value().and_then(Option::as_ref)
    }

    /// State implied by the delivery slot alone.
    fn derived_state(&self) -> CheckoutState {
        if self.delivery.is_pending() {
            CheckoutState::AwaitingDeliveryCheck
        } else if self.current_estimate().is_some_and(|e| e.available) {
            CheckoutState::ReadyToSubmit
        } else {
            CheckoutState::Editing
        }
    }

    /// Move to the state implied by the delivery slot. While an order is
    /// with the backend, or once it is placed, the state is left alone.
    fn settle(&mut self) -> Result<(), DomainError> {
        if self.state == CheckoutState::Submitting || self.state.is_terminal() {
            return Ok(());
        }
        let target = self.derived_state();
        if target == self.state {
            return Ok(());
        }
        self.transition(target)
    }

    /// Treat a submission nobody is waiting for any more as failed.
    fn abandon_submission(&mut self) -> Result<(), DomainError> {
        if self.state != CheckoutState::Submitting {
            return Ok(());
        }
        self.transition(CheckoutState::Failed)?;
        self.last_failure = Some(CheckoutFailure::TransientServer {
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        });
        self.settle()
    }
}

///
/// SubmissionGuard
///
/// Held across the backend call of [`CheckoutSession::submit`]. If the
/// submit future is dropped first, the session leaves `Submitting` the way
/// a failed call would.
///
struct SubmissionGuard<'a> {
    inner: &'a Mutex<SessionState>,
    finished: bool,
}

impl<'a> SubmissionGuard<'a> {
    const fn new(inner: &'a Mutex<SessionState>) -> Self {
        Self {
            inner,
            finished: false,
        }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut s = self.inner.lock();
        match s.abandon_submission() {
            Ok(()) => tracing::warn!(state = %s.state, "Order submission abandoned"),
            Err(e) => tracing::error!(error = %e, "Failed to recover abandoned submission"),
        }
    }
}

///
/// DeliveryCheckGuard
///
/// Held across the delivery check of [`CheckoutSession::edit_postal_code`].
/// If the future is dropped first, the check stops counting as in flight
/// (unless a newer edit already replaced it).
///
struct DeliveryCheckGuard<'a> {
    inner: &'a Mutex<SessionState>,
    token: RequestToken<PostalCode>,
    finished: bool,
}

impl<'a> DeliveryCheckGuard<'a> {
    const fn new(inner: &'a Mutex<SessionState>, token: RequestToken<PostalCode>) -> Self {
        Self {
            inner,
            token,
            finished: false,
        }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for DeliveryCheckGuard<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut s = self.inner.lock();
        if !s.delivery.abandon(&self.token) {
            return;
        }
        if let Err(e) = s.settle() {
            tracing::error!(error = %e, "Failed to settle after abandoned delivery check");
        }
        tracing::debug!(
            postal_code = %self.token.key(),
            state = %s.state,
            "Delivery check abandoned"
        );
    }
}

/// A single customer's checkout session.
///
/// # Example
///
/// ```ignore
/// let session = container.new_session();
/// session.edit_custom_text("rahul")?;
/// session.proceed_to_checkout().await?;
/// session.edit_contact_field(ContactField::Name, "Rahul Sharma")?;
/// session.edit_postal_code("110001").await?;
/// let confirmation = session.submit().await?;
/// ```
pub struct CheckoutSession<D, B>
where
    D: DeliveryCheckPort,
    B: OrderBackend,
{
    settings: SessionSettings,
    validate_customization: ValidateCustomizationUseCase,
    check_delivery: CheckDeliveryUseCase<D>,
    submit_order: SubmitOrderUseCase<B>,
    inner: Mutex<SessionState>,
}

impl<D, B> CheckoutSession<D, B>
where
    D: DeliveryCheckPort,
    B: OrderBackend,
{
    /// Create a new session in the `Editing` state.
    pub fn new(checker: Arc<D>, backend: Arc<B>, settings: SessionSettings) -> Self {
        Self::with_use_cases(
            ValidateCustomizationUseCase::new(settings.sanitizer, settings.validation_delay),
            CheckDeliveryUseCase::new(checker, settings.delivery_check_timeout),
            SubmitOrderUseCase::new(backend, settings.submission_timeout),
            settings,
        )
    }

    /// Create a new session from already-built use cases.
    pub fn with_use_cases(
        validate_customization: ValidateCustomizationUseCase,
        check_delivery: CheckDeliveryUseCase<D>,
        submit_order: SubmitOrderUseCase<B>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            settings,
            validate_customization,
            check_delivery,
            submit_order,
            inner: Mutex::new(SessionState::default()),
        }
    }

    // ========================================================================
    // Customization
    // ========================================================================

    /// Apply a raw edit of the custom text and return the stored value.
    ///
    /// An edit whose sanitized form is too long leaves the text unchanged.
    pub fn edit_custom_text(&self, raw: &str) -> Result<CustomText, CheckoutFailure> {
        let mut s = self.inner.lock();
        s.ensure_editable()?;
        match self.settings.sanitizer.try_sanitize(raw) {
            Ok(next) => {
                s.custom_text = next.clone();
                Ok(next)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Custom text edit ignored");
                Ok(s.custom_text.clone())
            }
        }
    }

    /// Validate the custom text and move on to the checkout form.
    ///
    /// On success the stored text is replaced by its trimmed form.
    pub async fn proceed_to_checkout(&self) -> Result<CustomText, CheckoutFailure> {
        let text = {
            let s = self.inner.lock();
            s.ensure_editable()?;
            s.custom_text.clone()
        };

        let trimmed = self.validate_customization.execute(&text).await?;

        let mut s = self.inner.lock();
        s.ensure_editable()?;
        if s.custom_text == text {
            s.custom_text = trimmed.clone();
        }
        tracing::info!(length = trimmed.len(), "Customization accepted");
        Ok(trimmed)
    }

    // ========================================================================
    // Checkout form
    // ========================================================================

    /// Set a contact field (name, email, phone or street address).
    pub fn edit_contact_field(
        &self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), CheckoutFailure> {
        let mut s = self.inner.lock();
        s.ensure_editable()?;
        s.customer.set(field, value);
        Ok(())
    }

    /// Set the pincode and, once it is six characters long, check delivery.
    ///
    /// Every edit drops the previous estimate. A check whose pincode has been
    /// edited again by the time it resolves is discarded.
    pub async fn edit_postal_code(
        &self,
        value: impl Into<String>,
    ) -> Result<DeliveryCheckOutcome, CheckoutFailure> {
        let token = {
            let mut s = self.inner.lock();
            s.ensure_editable()?;
            let code = PostalCode::new(value);
            s.customer.postal_code = code.clone();

            let token = if code.is_complete() {
                tracing::debug!(postal_code = %code, "Delivery check started");
                Some(s.delivery.issue(code))
            } else {
                s.delivery.invalidate();
                None
            };
            s.settle()?;
            token
        };

        let Some(token) = token else {
            return Ok(DeliveryCheckOutcome::Skipped);
        };

        let guard = DeliveryCheckGuard::new(&self.inner, token.clone());
        let estimate = self.check_delivery.execute(token.key()).await;
        guard.finish();

        let mut s = self.inner.lock();
        let postal_code = token.key().clone();
        if s.delivery.resolve(token, estimate.clone()) {
            s.settle()?;
            tracing::info!(
                postal_code = %postal_code,
                available = estimate.as_ref().is_some_and(|e| e.available),
                state = %s.state,
                "Delivery estimate applied"
            );
            Ok(DeliveryCheckOutcome::Resolved(estimate))
        } else {
            record_delivery_superseded();
            tracing::debug!(postal_code = %postal_code, "Superseded delivery result discarded");
            Ok(DeliveryCheckOutcome::Superseded)
        }
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Validate the order and send it to the backend.
    ///
    /// Local validation failures keep the current state and never reach the
    /// backend. A backend failure passes through `Failed` and lands back in
    /// the state the delivery estimate implies, so the customer can retry.
    pub async fn submit(&self) -> Result<OrderConfirmation, CheckoutFailure> {
        let request = {
            let mut s = self.inner.lock();
            if matches!(
                s.state,
                CheckoutState::Submitting | CheckoutState::Confirmed
            ) {
                CheckoutStateMachine::validate_transition(s.state, CheckoutState::Submitting)?;
            }

            let validated = OrderValidator::validate(
                &self.settings.sanitizer,
                &s.custom_text,
                &s.customer,
                s.current_estimate(),
            );
            let custom_text = match validated {
                Ok(text) => text,
                Err(failure) => {
                    let field = match &failure {
                        CheckoutFailure::Validation(e) => e.field().as_str(),
                        _ => "delivery",
                    };
                    record_validation_rejection(field);
                    tracing::info!(
                        reason = failure.kind(),
                        field,
                        state = %s.state,
                        "Order blocked before submission"
                    );
                    s.last_failure = Some(failure.clone());
                    return Err(failure);
                }
            };

            s.transition(CheckoutState::Submitting)?;
            s.last_failure = None;
            OrderRequest {
                custom_text,
                quantity: self.settings.quantity,
                unit_price: self.settings.unit_price,
                customer_info: s.customer.clone(),
            }
        };

        let guard = SubmissionGuard::new(&self.inner);
        tracing::info!(
            postal_code = %request.customer_info.postal_code,
            total = %request.total(),
            "Submitting order"
        );
        let result = self.submit_order.execute(&request).await;
        guard.finish();

        let mut s = self.inner.lock();
        match result {
            Ok(confirmation) => {
                s.transition(CheckoutState::Confirmed)?;
                s.confirmation = Some(confirmation.clone());
                Ok(confirmation)
            }
            Err(failure) => {
                s.transition(CheckoutState::Failed)?;
                s.settle()?;
                tracing::warn!(
                    reason = failure.kind(),
                    state = %s.state,
                    "Order submission failed"
                );
                s.last_failure = Some(failure.clone());
                Err(failure)
            }
        }
    }

    /// Clear every field and start over ("place another order").
    ///
    /// Not allowed while an order is with the backend.
    pub fn reset(&self) -> Result<(), CheckoutFailure> {
        let mut s = self.inner.lock();
        if s.state == CheckoutState::Submitting {
            CheckoutStateMachine::validate_transition(s.state, CheckoutState::Editing)?;
        }
        if s.state != CheckoutState::Editing {
            s.transition(CheckoutState::Editing)?;
        }
        s.delivery.invalidate();
        s.custom_text = CustomText::empty();
        s.customer = CustomerInfo::default();
        s.confirmation = None;
        s.last_failure = None;
        tracing::info!("Checkout session reset");
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Current lifecycle state.
    pub fn state(&self) -> CheckoutState {
        self.inner.lock().state
    }

    /// Current custom text.
    pub fn custom_text(&self) -> CustomText {
        self.inner.lock().custom_text.clone()
    }

    /// Current customer details.
    pub fn customer_info(&self) -> CustomerInfo {
        self.inner.lock().customer.clone()
    }

    /// Delivery estimate for the pincode currently entered, once known.
    pub fn delivery_estimate(&self) -> Option<DeliveryEstimate> {
        self.inner.lock().current_estimate().cloned()
    }

    /// Whether a check for the pincode currently entered is in flight.
    pub fn is_checking_delivery(&self) -> bool {
        self.inner.lock().delivery.is_pending()
    }

    /// Whether the place-order action is enabled.
    pub fn can_submit(&self) -> bool {
        self.inner.lock().state == CheckoutState::ReadyToSubmit
    }

    /// Confirmation of the placed order.
    pub fn confirmation(&self) -> Option<OrderConfirmation> {
        self.inner.lock().confirmation.clone()
    }

    /// Failure reported by the last checkout action, cleared by the next
    /// submission attempt or a reset.
    pub fn last_failure(&self) -> Option<CheckoutFailure> {
        self.inner.lock().last_failure.clone()
    }

    /// Order summary panel.
    pub fn order_summary(&self) -> OrderSummaryDto {
        let s = self.inner.lock();
        let summary = OrderSummaryDto::new(
            s.custom_text.trimmed().as_str(),
            self.settings.unit_price,
            self.settings.quantity,
        );
        match &s.confirmation {
            Some(confirmation) => summary.with_confirmation(confirmation),
            None => summary,
        }
    }
}
