pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/bookings", post(handlers::intake::submit_booking))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route(
            "/api/admin/bookings/export",
            get(handlers::admin::export_csv),
        )
        .route(
            "/api/admin/bookings/:id/status",
            post(handlers::admin::update_status),
        )
        .route(
            "/api/admin/bookings/:id/triage",
            post(handlers::admin::toggle_triage),
        )
        .with_state(state)
}
