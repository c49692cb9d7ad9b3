//! Data Transfer Objects (DTOs)
//!
//! DTOs are what the presentation layer renders.

mod order_summary_dto;

pub use order_summary_dto::{ConfirmedOrderDto, OrderSummaryDto, SHIPPING_LABEL_FREE};
