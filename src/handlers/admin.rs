use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::BookingStatus;
use crate::services::export;
use crate::services::triage::{self, FILTER_ALL};
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: usize = 10;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub refresh: Option<bool>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    // Fetch on first load or on request; otherwise serve the held snapshot so
    // locally patched records are what the console sees. Fetch failures are
    // logged by the board and leave the stale snapshot in place.
    if query.refresh.unwrap_or(false) || state.board.is_empty().await {
        state.board.refresh(state.api.as_ref()).await;
    }

    let status_filter = query.status.as_deref().unwrap_or(FILTER_ALL);
    let search = query.search.as_deref().unwrap_or("");
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    let all = state.board.snapshot().await;
    let filtered = triage::filter_bookings(&all, status_filter, search);
    let (records, total_pages) = triage::paginate(&filtered, page, page_size);

    Ok(Json(serde_json::json!({
        "data": records,
        "page": page,
        "total_pages": total_pages,
        "total": filtered.len(),
    })))
}

// POST /api/admin/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let new_status = BookingStatus::parse(&body.status)
        .ok_or_else(|| AppError::BadRequest(format!("unknown status: {}", body.status)))?;

    let updated = state
        .board
        .update_status(state.api.as_ref(), id, new_status)
        .await;

    if updated {
        Ok(Json(serde_json::json!({"ok": true})))
    } else {
        Err(AppError::Upstream("status update was not applied".to_string()))
    }
}

// POST /api/admin/bookings/:id/triage
pub async fn toggle_triage(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let known = state.board.snapshot().await.iter().any(|b| b.id == id);
    if !known {
        return Err(AppError::NotFound(format!("booking {id}")));
    }

    match state.board.toggle_triage(state.api.as_ref(), id).await {
        Some(next) => Ok(Json(
            serde_json::json!({"ok": true, "is_view": next.as_str()}),
        )),
        None => Err(AppError::Upstream("triage toggle was not applied".to_string())),
    }
}

// GET /api/admin/bookings/export
#[derive(Deserialize)]
pub struct ExportQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

pub async fn export_csv(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    if state.board.is_empty().await {
        state.board.refresh(state.api.as_ref()).await;
    }

    let status_filter = query.status.as_deref().unwrap_or(FILTER_ALL);
    let search = query.search.as_deref().unwrap_or("");

    // Export covers the filtered set, not a single page.
    let all = state.board.snapshot().await;
    let filtered = triage::filter_bookings(&all, status_filter, search);
    let csv = export::to_csv(&filtered);
    let filename = export::export_filename(Utc::now().date_naive());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
