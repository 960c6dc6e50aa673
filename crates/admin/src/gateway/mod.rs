//! Order backend gateway.
//!
//! Performs the two remote operations (list the order collection, update one
//! order's status) and normalizes transport/HTTP failures into a single
//! error channel. The gateway never retries; both operations are safe for
//! the caller to retry at its discretion.

pub mod http;

pub use http::HttpOrderGateway;

use async_trait::async_trait;
use thiserror::Error;

use orderdesk_core::{Order, OrderStatus};

/// Errors that can occur when talking to the order backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend rejected the credential (HTTP 401) or none was held.
    /// Always triggers a redirect to login, never an automatic retry.
    #[error("Authentication required: {0}")]
    Auth(String),

    /// Any other non-success HTTP response.
    #[error("HTTP {status}: {message}")]
    Request { status: u16, message: String },

    /// Network or response-parse failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GatewayError {
    /// Whether this failure means the session is gone and the user must
    /// sign in again.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// The remote order operations, as a seam so the view model can be
/// exercised without a network.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Fetch the full order collection.
    async fn list(&self) -> Result<Vec<Order>, GatewayError>;

    /// Request a status transition for one order. Returns no payload; the
    /// caller is responsible for re-fetching state.
    async fn update_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
    ) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::Auth("token expired".to_string());
        assert_eq!(err.to_string(), "Authentication required: token expired");

        let err = GatewayError::Request {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: maintenance");
    }

    #[test]
    fn test_is_auth() {
        assert!(GatewayError::Auth(String::new()).is_auth());
        assert!(
            !GatewayError::Request {
                status: 500,
                message: String::new()
            }
            .is_auth()
        );
    }
}
