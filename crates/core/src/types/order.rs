//! The order data model as returned by the admin order endpoint.
//!
//! Field resolution is deterministic: each field has exactly one fallback
//! rule, applied at deserialization time, so every consumer agrees on the
//! rendered defaults. See the deserializer helpers at the bottom.

use serde::{Deserialize, Deserializer, Serialize};

use super::status::OrderStatus;

/// A customer order.
///
/// Orders are created and owned entirely by the backend; the client reads
/// the full collection and may request a status transition, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Opaque backend identifier.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Lifecycle status; absent/unrecognized resolves to `pending`.
    #[serde(default)]
    pub status: OrderStatus,
    /// Order total; missing or non-numeric resolves to `0.0`.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total: f64,
    /// Creation timestamp as the backend sent it, parsed at render time.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    /// Line items; absent or not an array resolves to empty.
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Vec<OrderItem>,
    /// Customer projection, populated from the order's user reference.
    #[serde(rename = "userId", default)]
    pub customer: Option<Customer>,
    /// Delivery address, when the order has one.
    #[serde(rename = "deliveryAddress", default)]
    pub delivery_address: Option<DeliveryAddress>,
    /// Payment method label (e.g. "card", "cash on delivery").
    #[serde(rename = "paymentMethod", default)]
    pub payment_method: Option<String>,
    /// Payment status label as reported by the payment provider.
    #[serde(rename = "paymentStatus", default)]
    pub payment_status: Option<String>,
}

impl Order {
    /// Customer display name, falling back to `"Guest"`.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        self.customer
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Guest")
    }
}

/// A single order line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "productName", default)]
    pub product_name: Option<String>,
    /// Positive count; absent, non-numeric, or non-positive resolves to 1.
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    /// Unit price; missing or non-numeric resolves to `0.0`.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: f64,
}

impl Default for OrderItem {
    fn default() -> Self {
        Self {
            name: None,
            product_name: None,
            quantity: default_quantity(),
            price: 0.0,
        }
    }
}

impl OrderItem {
    /// Display name: `name`, then `productName`, first non-empty wins.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.product_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("Unknown Item")
    }

    /// Line subtotal: `price × quantity`.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Customer projection attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Delivery address attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAddress {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "zipCode", default)]
    pub zip_code: Option<String>,
}

// =============================================================================
// Lenient deserializers (the field-resolution policy)
// =============================================================================

const fn default_quantity() -> u32 {
    1
}

/// Amount fields accept a JSON number or a numeric string; anything else
/// resolves to `0.0`.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, parse_amount))
}

fn parse_amount(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Quantity fields accept a positive JSON integer; absent, non-numeric, or
/// non-positive values resolve to 1.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
        .unwrap_or(1))
}

/// The item list must be a JSON array; anything else resolves to empty.
/// Elements are resolved independently, so one malformed item degrades to
/// its field defaults without erasing its siblings.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<OrderItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map_or_else(Vec::new, |v| match v {
        serde_json::Value::Array(elements) => elements
            .into_iter()
            .map(|element| serde_json::from_value(element).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_minimal_payload() {
        let order: Order = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(order.id, None);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!((order.total - 0.0).abs() < f64::EPSILON);
        assert!(order.items.is_empty());
        assert_eq!(order.customer_name(), "Guest");
    }

    #[test]
    fn test_order_full_payload() {
        let json = r#"{
            "_id": "abc123456789",
            "status": "processing",
            "total": 42.5,
            "createdAt": "2026-03-01T12:00:00Z",
            "items": [{"name": "Pizza", "quantity": 2, "price": 10}],
            "userId": {"name": "Dana Smith", "email": "dana@example.com"},
            "deliveryAddress": {"street": "1 Main St", "city": "Olympia"},
            "paymentMethod": "card",
            "paymentStatus": "paid"
        }"#;
        let order: Order = serde_json::from_str(json).expect("deserialize");
        assert_eq!(order.id.as_deref(), Some("abc123456789"));
        assert_eq!(order.status, OrderStatus::Processing);
        assert!((order.total - 42.5).abs() < f64::EPSILON);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.customer_name(), "Dana Smith");
        assert_eq!(order.payment_status.as_deref(), Some("paid"));
    }

    #[test]
    fn test_total_non_numeric_resolves_to_zero() {
        let order: Order = serde_json::from_str(r#"{"total": "oops"}"#).expect("deserialize");
        assert!((order.total - 0.0).abs() < f64::EPSILON);

        let order: Order = serde_json::from_str(r#"{"total": null}"#).expect("deserialize");
        assert!((order.total - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_numeric_string_accepted() {
        let order: Order = serde_json::from_str(r#"{"total": "19.99"}"#).expect("deserialize");
        assert!((order.total - 19.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_items_not_an_array_resolves_to_empty() {
        let order: Order =
            serde_json::from_str(r#"{"items": "corrupted"}"#).expect("deserialize");
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_malformed_item_does_not_erase_siblings() {
        let order: Order = serde_json::from_str(
            r#"{"items": [{"name": "Pizza", "quantity": 2, "price": 10}, {"name": 5}]}"#,
        )
        .expect("deserialize");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].display_name(), "Pizza");
        assert_eq!(order.items[1].display_name(), "Unknown Item");
        assert_eq!(order.items[1].quantity, 1);
    }

    #[test]
    fn test_item_defaults() {
        let item: OrderItem = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(item.display_name(), "Unknown Item");
        assert_eq!(item.quantity, 1);
        assert!((item.subtotal() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_item_name_precedence() {
        let item: OrderItem =
            serde_json::from_str(r#"{"name": "Pizza", "productName": "Margherita"}"#)
                .expect("deserialize");
        assert_eq!(item.display_name(), "Pizza");

        let item: OrderItem = serde_json::from_str(r#"{"name": "", "productName": "Margherita"}"#)
            .expect("deserialize");
        assert_eq!(item.display_name(), "Margherita");
    }

    #[test]
    fn test_item_quantity_zero_resolves_to_one() {
        let item: OrderItem = serde_json::from_str(r#"{"quantity": 0}"#).expect("deserialize");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_item_subtotal() {
        let item: OrderItem =
            serde_json::from_str(r#"{"name": "Pizza", "quantity": 2, "price": 10}"#)
                .expect("deserialize");
        assert!((item.subtotal() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_customer_name_empty_falls_back_to_guest() {
        let order: Order =
            serde_json::from_str(r#"{"userId": {"name": ""}}"#).expect("deserialize");
        assert_eq!(order.customer_name(), "Guest");
    }
}
