use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::models::BookingRequest;
use crate::services::intake::{self, SubmissionOutcome};
use crate::state::AppState;

// POST /api/bookings
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookingRequest>,
) -> Response {
    tracing::info!(name = %request.full_name, date = %request.date, "incoming booking request");

    let today = Utc::now().date_naive();
    let outcome =
        intake::submit_booking(state.api.as_ref(), &state.catalog, request, today).await;

    match outcome {
        SubmissionOutcome::Confirmed { message } => (
            StatusCode::OK,
            Json(serde_json::json!({"status": true, "message": message})),
        )
            .into_response(),
        SubmissionOutcome::Rejected(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"status": false, "message": e.to_string()})),
        )
            .into_response(),
        SubmissionOutcome::Failed { message } => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({"status": false, "message": message})),
        )
            .into_response(),
    }
}
