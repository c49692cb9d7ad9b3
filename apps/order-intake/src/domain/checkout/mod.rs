//! Checkout Bounded Context
//!
//! Everything between "the text is ready" and "the order is placed":
//! customer details, the order request handed to the backend, the
//! confirmation it returns, and the lifecycle of a checkout session.
//!
//! # Key Concepts
//!
//! - **Checkout State**: `Editing → AwaitingDeliveryCheck → ReadyToSubmit → Submitting → Confirmed | Failed`
//! - **Order Validator**: Synchronous precondition checks run before any submission
//! - **Checkout Failure**: Every failure is recoverable and returns the session to an editable state

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::CheckoutFailure;
pub use services::{CheckoutStateMachine, OrderValidator};
pub use value_objects::{
    CheckoutState, ContactField, CustomerInfo, OrderConfirmation, OrderRequest,
    format_long_date,
};
