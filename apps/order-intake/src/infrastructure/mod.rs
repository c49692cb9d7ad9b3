//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `simulated/`: In-process stand-ins for the delivery checker and the order
//!   backend, with configurable latency and failure injection
//! - `config/`: Dependency injection container

pub mod config;
pub mod simulated;

pub use config::{Container, SimulatedContainer};
pub use simulated::{SERVER_UNAVAILABLE_MESSAGE, SimulatedDeliveryChecker, SimulatedOrderBackend};
