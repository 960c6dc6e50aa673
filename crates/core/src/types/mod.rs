//! Core types for OrderDesk.
//!
//! The order model deserializes defensively: the backend owns the data and
//! has historically been loose about optional fields, so every field carries
//! an explicit resolution rule instead of failing the whole payload.

pub mod format;
pub mod order;
pub mod status;

pub use format::{INVALID_DATE, NOT_AVAILABLE, format_created_at, format_price, short_order_id};
pub use order::{Customer, DeliveryAddress, Order, OrderItem};
pub use status::{OrderStatus, ParseStatusError};
