//! Order lifecycle status.

use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when parsing an [`OrderStatus`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ParseStatusError {
    /// The input is not one of the four lifecycle values.
    #[error("invalid order status: {0}")]
    Unrecognized(String),
}

/// Order lifecycle status.
///
/// The backend only ever stores these four values. Anything else on the wire
/// (absent field, unrecognized string) resolves to `Pending` so a single bad
/// record can never invent a fifth status or poison the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order. The list selector offers exactly
    /// these values.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Processing,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Wire/display form (matches the backend's stored strings).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError::Unrecognized(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Unknown strings fall back to the default rather than rejecting
        // the containing order.
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_display_round_trips() {
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.as_str().parse().expect("round trip");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_deserialize_known_value() {
        let status: OrderStatus = serde_json::from_str("\"delivered\"").expect("deserialize");
        assert_eq!(status, OrderStatus::Delivered);
    }

    #[test]
    fn test_deserialize_unknown_falls_back_to_pending() {
        let status: OrderStatus = serde_json::from_str("\"shipped\"").expect("deserialize");
        assert_eq!(status, OrderStatus::Pending);

        let status: OrderStatus = serde_json::from_str("null").expect("deserialize");
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Processing).expect("serialize");
        assert_eq!(json, "\"processing\"");
    }
}
