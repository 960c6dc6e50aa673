//! Read-only projections of the order model for display.
//!
//! Each view struct is built by projecting an [`Order`](orderdesk_core::Order)
//! borrowed from the view model; renderers never mutate state and all field
//! fallbacks are resolved here so templates stay logic-free.

pub mod detail;
pub mod list;

pub use detail::OrderDetailView;
pub use list::OrderRow;
