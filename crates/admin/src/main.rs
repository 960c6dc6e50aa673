//! OrderDesk Admin - order review console.
//!
//! Loads the admin credential and backend URL from the environment, fetches
//! the full order collection, and renders it as a table. Intended for
//! operators reviewing and transitioning order statuses.
//!
//! # Security
//!
//! The bearer credential grants admin access to the order backend. Run this
//! only from trusted operator machines.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Console binary: stdout/stderr are the rendering surface.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use orderdesk_admin::auth::CredentialContext;
use orderdesk_admin::config::AdminConfig;
use orderdesk_admin::gateway::HttpOrderGateway;
use orderdesk_admin::viewmodel::{OrdersViewModel, ViewState};
use orderdesk_admin::views::OrderRow;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "orderdesk_admin=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AdminConfig::from_env().expect("Failed to load configuration");
    tracing::info!(api_url = %config.api_url, "Configuration loaded");

    let credentials = CredentialContext::new(config.api_token.clone());
    let gateway = HttpOrderGateway::new(config.api_url, credentials.clone());

    let mut model = OrdersViewModel::new(gateway, credentials);
    model.initialize().await;

    match model.state() {
        ViewState::Ready => {
            let rows: Vec<OrderRow> = model.orders().iter().map(OrderRow::from).collect();
            render_orders(&rows);
        }
        ViewState::Errored { message } => {
            eprintln!("Failed to load orders: {message}");
            std::process::exit(1);
        }
        ViewState::Unauthenticated { message } => {
            eprintln!("{message}");
            std::process::exit(1);
        }
        ViewState::Idle | ViewState::Loading => unreachable!("initialize always settles"),
    }
}

fn render_orders(rows: &[OrderRow]) {
    if rows.is_empty() {
        println!("No orders yet.");
        return;
    }

    println!(
        "{:<8} {:<20} {:<40} {:>10} {:<12} {}",
        "Order", "Customer", "Items", "Total", "Status", "Date"
    );
    for row in rows {
        println!(
            "{:<8} {:<20} {:<40} {:>10} {:<12} {}",
            row.reference,
            row.customer,
            row.items_display(),
            row.total,
            row.status,
            row.created_at,
        );
    }
    println!("\n{} order(s)", rows.len());
}
