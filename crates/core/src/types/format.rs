//! Display formatting shared by the list and detail renderers.

use chrono::DateTime;

/// Rendered placeholder for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rendered placeholder for timestamps that fail to parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a currency amount for display, always with exactly two decimals
/// (e.g. `$42.50`).
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Short order reference: the last six characters of the id, or `"N/A"`
/// when the order has none.
#[must_use]
pub fn short_order_id(id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => {
            let chars: Vec<char> = id.chars().collect();
            let start = chars.len().saturating_sub(6);
            chars.iter().skip(start).collect()
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Format a creation timestamp as long-form month/day/year
/// (e.g. `March 1, 2026`).
///
/// Absent timestamps render `"N/A"`; unparseable ones degrade to
/// `"Invalid Date"` rather than propagating an error.
#[must_use]
pub fn format_created_at(created_at: Option<&str>) -> String {
    match created_at {
        None => NOT_AVAILABLE.to_string(),
        Some(raw) if raw.is_empty() => NOT_AVAILABLE.to_string(),
        Some(raw) => DateTime::parse_from_rfc3339(raw).map_or_else(
            |_| INVALID_DATE.to_string(),
            |dt| dt.format("%B %-d, %Y").to_string(),
        ),
    }
}
