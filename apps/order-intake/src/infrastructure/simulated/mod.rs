//! Simulated adapters.
//!
//! Both adapters fabricate latency with `tokio::time::sleep`, so tests running
//! on a paused clock complete instantly.

mod delivery;
mod order_backend;

pub use delivery::SimulatedDeliveryChecker;
pub use order_backend::{SERVER_UNAVAILABLE_MESSAGE, SimulatedOrderBackend};
