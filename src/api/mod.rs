//! REST API for the layout-pass snapshot.
//!
//! Provides two GET endpoints:
//! - `/state` — configuration, adjustments, and summary metrics
//! - `/layout` — turbine records with optional index-range filtering

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::config::LayoutConfig;
use crate::farm::TurbineSet;
use crate::pass::Adjustments;
use crate::report::SummaryReport;

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the regenerate pass completes and wrapped in
/// `Arc` — no locks needed since all data is read-only.
pub struct AppState {
    /// Configuration the pass ran with.
    pub config: LayoutConfig,
    /// Adjustment values applied in the pass.
    pub adjustments: Adjustments,
    /// Final turbine set with anchors.
    pub turbines: TurbineSet,
    /// Aggregate summary metrics.
    pub summary: SummaryReport,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/state", get(handlers::get_state))
        .route("/layout", get(handlers::get_layout))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind API listener on {addr}: {e}"));
    eprintln!("API listening on {addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("API server failed: {e}"));
}
