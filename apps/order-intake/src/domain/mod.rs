//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic (sanitization, serviceability, validation)
//! - **State Machine**: Legal transitions of a checkout session
//!
//! # Bounded Contexts
//!
//! - [`customization`]: Custom plate text and its sanitization rules
//! - [`delivery`]: Pincodes and delivery serviceability
//! - [`checkout`]: Customer details, order requests, confirmations and the checkout lifecycle

pub mod checkout;
pub mod customization;
pub mod delivery;
pub mod shared;
