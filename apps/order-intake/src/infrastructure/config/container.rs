//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components.

use std::sync::Arc;

use crate::application::ports::{DeliveryCheckPort, OrderBackend};
use crate::application::services::{CheckoutSession, SessionSettings};
use crate::application::use_cases::{
    CheckDeliveryUseCase, SubmitOrderUseCase, ValidateCustomizationUseCase,
};
use crate::config::{Config, ConfigError};
use crate::infrastructure::simulated::{SimulatedDeliveryChecker, SimulatedOrderBackend};

/// Container wired with the in-process simulated adapters.
pub type SimulatedContainer = Container<SimulatedDeliveryChecker, SimulatedOrderBackend>;

/// Dependency injection container.
///
/// Holds the port implementations and session settings. Sessions created
/// from one container share the ports but nothing else.
pub struct Container<D, B>
where
    D: DeliveryCheckPort + 'static,
    B: OrderBackend + 'static,
{
    // Ports
    checker: Arc<D>,
    backend: Arc<B>,
    settings: SessionSettings,
}

impl<D, B> Container<D, B>
where
    D: DeliveryCheckPort + 'static,
    B: OrderBackend + 'static,
{
    /// Create a new container with all dependencies.
    pub const fn new(checker: Arc<D>, backend: Arc<B>, settings: SessionSettings) -> Self {
        Self {
            checker,
            backend,
            settings,
        }
    }

    /// Get the delivery check port.
    pub fn checker(&self) -> Arc<D> {
        Arc::clone(&self.checker)
    }

    /// Get the session settings.
    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Create a `ValidateCustomizationUseCase`.
    pub const fn validate_customization_use_case(&self) -> ValidateCustomizationUseCase {
        ValidateCustomizationUseCase::new(self.settings.sanitizer, self.settings.validation_delay)
    }

    /// Create a `CheckDeliveryUseCase`.
    pub fn check_delivery_use_case(&self) -> CheckDeliveryUseCase<D> {
        CheckDeliveryUseCase::new(
            Arc::clone(&self.checker),
            self.settings.delivery_check_timeout,
        )
    }

    /// Create a `SubmitOrderUseCase`.
    pub fn submit_order_use_case(&self) -> SubmitOrderUseCase<B> {
        SubmitOrderUseCase::new(Arc::clone(&self.backend), self.settings.submission_timeout)
    }

    /// Start a new checkout session.
    pub fn new_session(&self) -> CheckoutSession<D, B> {
        CheckoutSession::with_use_cases(
            self.validate_customization_use_case(),
            self.check_delivery_use_case(),
            self.submit_order_use_case(),
            self.settings.clone(),
        )
    }
}

impl SimulatedContainer {
    /// Wire the simulated adapters from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration does not validate.
    pub fn simulated(config: &Config) -> Result<Self, ConfigError> {
        let settings = SessionSettings::try_from(config)?;
        Ok(Self::new(
            Arc::new(SimulatedDeliveryChecker::new(
                config.simulation.delivery_latency(),
            )),
            Arc::new(SimulatedOrderBackend::new(&config.simulation)),
            settings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::CheckoutState;
    use crate::domain::delivery::PostalCode;

    fn container() -> SimulatedContainer {
        let mut config = Config::default();
        config.simulation.seed = Some(1);
        SimulatedContainer::simulated(&config).unwrap()
    }

    #[test]
    fn settings_follow_config() {
        let container = container();
        let settings = container.settings();

        assert_eq!(settings.quantity, 1);
        assert_eq!(settings.unit_price.to_string(), "2000");
        assert_eq!(settings.sanitizer.max_len(), 12);
        assert_eq!(settings.submission_timeout.as_millis(), 10_000);
    }

    #[test]
    fn sessions_are_independent() {
        let container = container();
        let a = container.new_session();
        let b = container.new_session();

        a.edit_custom_text("RAHUL").unwrap();

        assert_eq!(a.custom_text().as_str(), "RAHUL");
        assert!(b.custom_text().is_empty());
        assert_eq!(b.state(), CheckoutState::Editing);
    }

    #[tokio::test(start_paused = true)]
    async fn use_cases_share_ports() {
        let container = container();

        let estimate = container
            .check_delivery_use_case()
            .execute(&PostalCode::from("400001"))
            .await;

        assert!(estimate.is_some_and(|e| e.available));
        assert_eq!(container.checker().checks_performed(), 1);
    }

    #[test]
    fn invalid_text_limits_are_an_error_not_a_panic() {
        let mut config = Config::default();
        config.catalog.max_custom_text_len = 0;

        let Err(err) = SimulatedContainer::simulated(&config) else {
            panic!("expected config error");
        };
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn sessions_use_container_settings() {
        let mut config = Config::default();
        config.catalog.min_custom_text_len = 4;
        config.simulation.validation_latency_ms = 0;
        let container = SimulatedContainer::simulated(&config).unwrap();
        let session = container.new_session();

        session.edit_custom_text("ABC").unwrap();
        let err = session.proceed_to_checkout().await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Please enter at least 4 characters for your custom text"
        );
    }
}
