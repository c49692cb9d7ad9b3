// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Order Intake - Rust Core Library
//!
//! Checkout core of a storefront selling customizable magnetic number plates.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, domain services, state machine)
//!   - `customization`: Custom text and its sanitizer
//!   - `delivery`: Pincodes and serviceability
//!   - `checkout`: Customer details, order requests, confirmations, checkout lifecycle
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`DeliveryCheckPort`, `OrderBackend`)
//!   - `use_cases`: `ValidateCustomization`, `CheckDelivery`, `SubmitOrder`
//!   - `services`: `CheckoutSession`, the per-customer workflow
//!   - `dto`: Order summary for the presentation layer
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `simulated`: In-process delivery checker and order backend
//!   - `config`: Dependency injection container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and wiring.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration loading and validation.
pub mod config;

/// Metrics and logging.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::checkout::{
    CheckoutFailure, CheckoutState, ContactField, CustomerInfo, OrderConfirmation, OrderRequest,
};
pub use domain::customization::{CustomText, TextSanitizer};
pub use domain::delivery::{DeliveryEstimate, PostalCode};
pub use domain::shared::{DomainError, Money, OrderId, ValidationError, ValidationField};

// Application re-exports
pub use application::dto::OrderSummaryDto;
pub use application::ports::{
    DeliveryCheckError, DeliveryCheckPort, OrderBackend, OrderBackendError,
};
pub use application::services::{CheckoutSession, DeliveryCheckOutcome, SessionSettings};

// Infrastructure re-exports
pub use infrastructure::{
    Container, SimulatedContainer, SimulatedDeliveryChecker, SimulatedOrderBackend,
};
