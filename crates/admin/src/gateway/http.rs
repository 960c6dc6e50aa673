//! HTTP implementation of the order gateway.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::instrument;

use orderdesk_core::{Order, OrderStatus};

use crate::auth::CredentialContext;

use super::{GatewayError, OrderGateway};

/// Default message when a 401 body carries none.
const DEFAULT_AUTH_MESSAGE: &str = "Invalid or expired access token";

/// Order backend HTTP client.
///
/// Sends the bearer credential on every request and maps the response onto
/// the gateway error taxonomy. Cheap to clone; all clones share one
/// connection pool.
#[derive(Clone)]
pub struct HttpOrderGateway {
    inner: Arc<HttpOrderGatewayInner>,
}

struct HttpOrderGatewayInner {
    client: reqwest::Client,
    base_url: String,
    credentials: CredentialContext,
}

/// Error body shape shared by all backend failure responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl HttpOrderGateway {
    /// Create a gateway against the given backend base URL.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never happen
    /// under normal circumstances as we use standard TLS configuration.
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: CredentialContext) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            inner: Arc::new(HttpOrderGatewayInner {
                client,
                base_url: base_url.into(),
                credentials,
            }),
        }
    }

    fn orders_url(&self) -> String {
        format!("{}/api/admin/orders", self.inner.base_url)
    }

    fn status_url(&self, order_id: &str) -> String {
        format!("{}/api/admin/orders/{order_id}/status", self.inner.base_url)
    }

    /// The bearer header value, or an auth error when no token is held.
    fn bearer(&self) -> Result<String, GatewayError> {
        self.inner.credentials.token().map_or_else(
            || Err(GatewayError::Auth("No access token".to_string())),
            |token| Ok(format!("Bearer {}", token.expose_secret())),
        )
    }
}

/// Map a non-success response onto the error taxonomy.
///
/// 401 becomes an auth failure carrying the server's message (or a default);
/// everything else becomes a request failure embedding the status code and
/// the server's message when present.
fn error_for(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty());

    if status == 401 {
        GatewayError::Auth(message.unwrap_or_else(|| DEFAULT_AUTH_MESSAGE.to_string()))
    } else {
        GatewayError::Request {
            status,
            message: message.unwrap_or_else(|| "Request failed".to_string()),
        }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Order>, GatewayError> {
        let bearer = self.bearer()?;

        let response = self
            .inner
            .client
            .get(self.orders_url())
            .header("Authorization", bearer)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for(status.as_u16(), &body));
        }

        // A backend with no orders may respond with null instead of [].
        let orders: Option<Vec<Order>> = response.json().await?;
        Ok(orders.unwrap_or_default())
    }

    #[instrument(skip(self), fields(order_id = %order_id, new_status = %new_status))]
    async fn update_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
    ) -> Result<(), GatewayError> {
        let bearer = self.bearer()?;

        let response = self
            .inner
            .client
            .put(self.status_url(order_id))
            .header("Authorization", bearer)
            .json(&serde_json::json!({ "status": new_status }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for(status.as_u16(), &body));
        }

        // No required body on success; the caller refreshes state.
        Ok(())
    }
}
