pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, BookingStatus};

/// Wire payload for booking creation. Field names are the API contract;
/// service and lawyer are already-resolved display strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBookingPayload {
    pub full_name: String,
    pub email: String,
    pub phone_no: String,
    pub organisation: String,
    pub service_name: String,
    pub preferred_lawyer: String,
    pub message: String,
    pub date: String,
    pub time: String,
}

/// Result of a creation call that reached the server. `accepted` mirrors the
/// body-level boolean `status` field, not the HTTP status.
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub accepted: bool,
    pub message: Option<String>,
}

/// The remote booking API. Injected wherever bookings are read or mutated so
/// the workflow is testable without a live server.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// POST /booking/store
    async fn create_booking(&self, payload: &NewBookingPayload) -> anyhow::Result<CreateOutcome>;

    /// GET /booking. Returns the full collection; all filtering is local.
    async fn list_bookings(&self) -> anyhow::Result<Vec<Booking>>;

    /// POST /bookings/status/{id}. Returns the body-level success flag.
    async fn update_status(&self, id: i64, status: BookingStatus) -> anyhow::Result<bool>;

    /// POST /booking/mark-read/{id}. The server flips the stored triage
    /// state itself; the flag returned is the body-level success flag.
    async fn mark_read(&self, id: i64) -> anyhow::Result<bool>;
}
