//! Order detail projection.

use orderdesk_core::{
    NOT_AVAILABLE, Order, format_created_at, format_price, short_order_id,
};

/// Full detail view of one order, organized in the five sections the
/// detail panel renders. Every absent field is already resolved to `N/A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailView {
    pub order: OrderSection,
    pub customer: CustomerSection,
    pub delivery: DeliverySection,
    pub items: Vec<ItemLine>,
    pub payment: PaymentSection,
}

/// Order information: reference, status, date, total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSection {
    pub reference: String,
    pub status: String,
    pub created_at: String,
    pub total: String,
}

/// Customer information: name, email, phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSection {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Delivery address: street, city, state, zip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySection {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// One item row: `"{quantity} x {name}"` plus unit price and line subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub description: String,
    pub unit_price: String,
    pub subtotal: String,
}

/// Payment information: method and provider status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSection {
    pub method: String,
    pub status: String,
}

fn or_not_available(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

impl From<&Order> for OrderDetailView {
    fn from(order: &Order) -> Self {
        let customer = order.customer.as_ref();
        let address = order.delivery_address.as_ref();

        Self {
            order: OrderSection {
                reference: short_order_id(order.id.as_deref()),
                status: order.status.to_string(),
                created_at: format_created_at(order.created_at.as_deref()),
                total: format_price(order.total),
            },
            customer: CustomerSection {
                name: or_not_available(customer.and_then(|c| c.name.as_deref())),
                email: or_not_available(customer.and_then(|c| c.email.as_deref())),
                phone: or_not_available(customer.and_then(|c| c.phone.as_deref())),
            },
            delivery: DeliverySection {
                street: or_not_available(address.and_then(|a| a.street.as_deref())),
                city: or_not_available(address.and_then(|a| a.city.as_deref())),
                state: or_not_available(address.and_then(|a| a.state.as_deref())),
                zip_code: or_not_available(address.and_then(|a| a.zip_code.as_deref())),
            },
            items: order
                .items
                .iter()
                .map(|item| ItemLine {
                    description: format!("{} x {}", item.quantity, item.display_name()),
                    unit_price: format_price(item.price),
                    subtotal: format_price(item.subtotal()),
                })
                .collect(),
            payment: PaymentSection {
                method: or_not_available(order.payment_method.as_deref()),
                status: or_not_available(order.payment_status.as_deref()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_projects_full_order() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "_id": "abc123456789",
            "status": "processing",
            "total": 42.5,
            "createdAt": "2026-03-01T12:00:00Z",
            "items": [{"name": "Pizza", "quantity": 2, "price": 10}],
            "userId": {
                "name": "Dana Smith",
                "email": "dana@example.com",
                "phone": "555-0100",
            },
            "deliveryAddress": {
                "street": "1 Main St",
                "city": "Olympia",
                "state": "WA",
                "zipCode": "98501",
            },
            "paymentMethod": "card",
            "paymentStatus": "paid",
        }))
        .expect("deserialize");

        let view = OrderDetailView::from(&order);
        assert_eq!(view.order.reference, "456789");
        assert_eq!(view.order.status, "processing");
        assert_eq!(view.order.created_at, "March 1, 2026");
        assert_eq!(view.order.total, "$42.50");
        assert_eq!(view.customer.name, "Dana Smith");
        assert_eq!(view.customer.email, "dana@example.com");
        assert_eq!(view.customer.phone, "555-0100");
        assert_eq!(view.delivery.street, "1 Main St");
        assert_eq!(view.delivery.zip_code, "98501");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].description, "2 x Pizza");
        assert_eq!(view.items[0].unit_price, "$10.00");
        assert_eq!(view.items[0].subtotal, "$20.00");
        assert_eq!(view.payment.method, "card");
        assert_eq!(view.payment.status, "paid");
    }

    #[test]
    fn test_detail_degrades_empty_order() {
        let order: Order = serde_json::from_str("{}").expect("deserialize");

        let view = OrderDetailView::from(&order);
        assert_eq!(view.order.reference, "N/A");
        assert_eq!(view.order.status, "pending");
        assert_eq!(view.order.created_at, "N/A");
        assert_eq!(view.order.total, "$0.00");
        // Unlike the list row, the detail panel has no "Guest" shorthand.
        assert_eq!(view.customer.name, "N/A");
        assert_eq!(view.customer.email, "N/A");
        assert_eq!(view.customer.phone, "N/A");
        assert_eq!(view.delivery.street, "N/A");
        assert_eq!(view.delivery.city, "N/A");
        assert_eq!(view.delivery.state, "N/A");
        assert_eq!(view.delivery.zip_code, "N/A");
        assert!(view.items.is_empty());
        assert_eq!(view.payment.method, "N/A");
        assert_eq!(view.payment.status, "N/A");
    }

    #[test]
    fn test_detail_item_defaults() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "items": [{}],
        }))
        .expect("deserialize");

        let view = OrderDetailView::from(&order);
        assert_eq!(view.items[0].description, "1 x Unknown Item");
        assert_eq!(view.items[0].unit_price, "$0.00");
        assert_eq!(view.items[0].subtotal, "$0.00");
    }

    #[test]
    fn test_detail_empty_strings_degrade() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "userId": {"name": "", "email": ""},
            "deliveryAddress": {"street": ""},
            "paymentMethod": "",
        }))
        .expect("deserialize");

        let view = OrderDetailView::from(&order);
        assert_eq!(view.customer.name, "N/A");
        assert_eq!(view.customer.email, "N/A");
        assert_eq!(view.delivery.street, "N/A");
        assert_eq!(view.payment.method, "N/A");
    }
}
