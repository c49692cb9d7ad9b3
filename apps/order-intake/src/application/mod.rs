//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for the delivery checker and the order backend
//! - **Use Cases**: One async step of the checkout each
//! - **Services**: The checkout session that sequences the use cases
//! - **DTOs**: Data transfer objects for the presentation layer

pub mod dto;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use services::*;
pub use use_cases::*;
