//! Order view model.
//!
//! Owns the in-memory order collection, the loading/error/selection state,
//! and orchestrates the credential guard and the gateway in response to
//! lifecycle events and user actions. Renderers borrow its state and never
//! mutate it.
//!
//! The remote collection is the single source of truth: after every
//! successful mutation the full collection is re-fetched and replaced,
//! never patched in place.

use orderdesk_core::{Order, OrderStatus};
use tracing::instrument;

use crate::auth::CredentialContext;
use crate::gateway::{GatewayError, OrderGateway};

/// Message carried by the login redirect when the held credential is
/// missing or expired.
const SESSION_EXPIRED: &str = "Session expired. Please sign in again.";

/// The view's lifecycle state.
///
/// Transitions: `Idle -> Loading -> Ready`, `Loading -> Errored`,
/// `Ready -> Loading` (refresh/mutate), and any state `-> Unauthenticated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Not yet initialized.
    Idle,
    /// A list fetch is outstanding.
    Loading,
    /// The collection is displayed.
    Ready,
    /// The list fetch failed; the error panel with a manual retry is shown.
    Errored { message: String },
    /// The credential is gone; the caller must redirect to login carrying
    /// the message. No other page state survives this transition.
    Unauthenticated { message: String },
}

/// Stateful orchestrator between the credential guard, the order gateway,
/// and the renderers.
pub struct OrdersViewModel<G> {
    gateway: G,
    credentials: CredentialContext,
    state: ViewState,
    orders: Vec<Order>,
    selected: Option<Order>,
    notice: Option<String>,
}

impl<G: OrderGateway> OrdersViewModel<G> {
    /// Create an idle view model around an injected gateway and credential
    /// context.
    pub const fn new(gateway: G, credentials: CredentialContext) -> Self {
        Self {
            gateway,
            credentials,
            state: ViewState::Idle,
            orders: Vec::new(),
            selected: None,
            notice: None,
        }
    }

    /// Mount flow: guard check, then the initial list fetch.
    ///
    /// An invalid or absent credential redirects without ever calling the
    /// gateway.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) {
        self.state = ViewState::Loading;

        if !self.credentials.is_valid() {
            self.redirect_to_login(SESSION_EXPIRED.to_string());
            return;
        }

        self.fetch_orders().await;
    }

    /// Manual retry after a failed list fetch.
    #[instrument(skip(self))]
    pub async fn retry(&mut self) {
        self.state = ViewState::Loading;
        self.fetch_orders().await;
    }

    /// Request a status transition for one order.
    ///
    /// On success the full collection is re-fetched - exactly one fetch,
    /// never a local patch. On failure the previously displayed list is left
    /// untouched (so the selector re-renders the prior status) and a
    /// blocking notice carries the error message.
    #[instrument(skip(self), fields(order_id = %order_id, new_status = %new_status))]
    pub async fn change_status(&mut self, order_id: &str, new_status: OrderStatus) {
        if !self.credentials.is_valid() {
            self.redirect_to_login(SESSION_EXPIRED.to_string());
            return;
        }

        match self.gateway.update_status(order_id, new_status).await {
            Ok(()) => {
                self.notice = None;
                self.state = ViewState::Loading;
                self.fetch_orders().await;
            }
            Err(GatewayError::Auth(message)) => self.redirect_to_login(message),
            Err(err) => {
                tracing::warn!(error = %err, "Status update failed");
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Select an order for the detail view. Selection only ever references
    /// an order already present in the held collection; unknown ids leave
    /// the selection empty. No network effect.
    pub fn select_order(&mut self, order_id: &str) {
        self.selected = self
            .orders
            .iter()
            .find(|o| o.id.as_deref() == Some(order_id))
            .cloned();
    }

    /// Dismiss the detail view. No network effect.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Dismiss the blocking notice from a failed status update.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The held order collection.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The order selected for the detail view, if any.
    pub const fn selected(&self) -> Option<&Order> {
        self.selected.as_ref()
    }

    /// The blocking notice from a failed status update, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Fetch the collection and settle into `Ready` or `Errored`. A 401
    /// redirects instead of showing the error panel.
    async fn fetch_orders(&mut self) {
        match self.gateway.list().await {
            Ok(orders) => {
                self.orders = orders;
                self.state = ViewState::Ready;
            }
            Err(GatewayError::Auth(message)) => self.redirect_to_login(message),
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch orders");
                self.state = ViewState::Errored {
                    message: err.to_string(),
                };
            }
        }
    }

    /// Signal navigation-away; nothing else survives the redirect.
    fn redirect_to_login(&mut self, message: String) {
        self.orders.clear();
        self.selected = None;
        self.notice = None;
        self.state = ViewState::Unauthenticated { message };
    }
}
