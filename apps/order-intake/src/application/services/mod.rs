//! Application Services
//!
//! Stateful coordinators that sequence use cases over a customer's session.

mod delivery_slot;
mod order_workflow;

pub use delivery_slot::{LatestRequestSlot, RequestToken};
pub use order_workflow::{CheckoutSession, DeliveryCheckOutcome, SessionSettings};
