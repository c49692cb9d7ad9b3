//! Application Ports (Driven)
//!
//! Ports define how the workflow reaches systems it does not own. The
//! storefront ships simulated adapters for both; a real backend replaces them
//! without touching the checkout session.

mod delivery_check_port;
mod order_backend_port;

pub use delivery_check_port::{DeliveryCheckError, DeliveryCheckPort};
pub use order_backend_port::{OrderBackend, OrderBackendError};

#[cfg(test)]
pub use delivery_check_port::MockDeliveryCheckPort;
#[cfg(test)]
pub use order_backend_port::MockOrderBackend;
