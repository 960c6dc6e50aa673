//! Order list row projection.

use orderdesk_core::{Order, OrderStatus, format_created_at, format_price, short_order_id};

/// One row of the order table, with every display fallback already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    /// Backend identifier, used to address mutations and selection.
    pub order_id: Option<String>,
    /// Short order reference (last six id characters, or `N/A`).
    pub reference: String,
    /// Customer display name, `Guest` when anonymous.
    pub customer: String,
    /// One `"{quantity} x {name}"` line per item; empty list means the row
    /// renders `No items`.
    pub item_lines: Vec<String>,
    /// Order total, two decimals.
    pub total: String,
    /// Current status, pre-selected in the row's status selector.
    pub status: OrderStatus,
    /// Long-form creation date, `N/A` or `Invalid Date` when degraded.
    pub created_at: String,
}

impl OrderRow {
    /// Rendered item lines, with the empty-cart placeholder applied.
    #[must_use]
    pub fn items_display(&self) -> String {
        if self.item_lines.is_empty() {
            "No items".to_string()
        } else {
            self.item_lines.join(", ")
        }
    }

    /// The selectable status values for the row's selector, in display order.
    #[must_use]
    pub const fn status_options() -> [OrderStatus; 4] {
        OrderStatus::ALL
    }
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            reference: short_order_id(order.id.as_deref()),
            customer: order.customer_name().to_string(),
            item_lines: order
                .items
                .iter()
                .map(|item| format!("{} x {}", item.quantity, item.display_name()))
                .collect(),
            total: format_price(order.total),
            status: order.status,
            created_at: format_created_at(order.created_at.as_deref()),
        }
    }
}
