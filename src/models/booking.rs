use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted appointment request as returned by the booking API.
///
/// Service and lawyer are denormalized display strings resolved at submission
/// time; the record carries no foreign keys back into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_no: String,
    #[serde(default)]
    pub organisation: String,
    pub service_name: String,
    pub preferred_lawyer: String,
    pub message: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub reschedule_date: Option<String>,
    #[serde(default)]
    pub reschedule_time: Option<String>,
    pub status: BookingStatus,
    pub is_view: TriageStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Appointment lifecycle. Any value is settable from the admin side; the
/// server enforces no transition ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    New,
    Accepted,
    Cancelled,
    Rescheduled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::New => "new",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Rescheduled => "rescheduled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(BookingStatus::New),
            "accepted" => Some(BookingStatus::Accepted),
            "cancelled" => Some(BookingStatus::Cancelled),
            "rescheduled" => Some(BookingStatus::Rescheduled),
            _ => None,
        }
    }
}

/// Staff triage state, independent of the appointment lifecycle.
///
/// The admin toggle only ever flips between `Closed` and `New`; `Read` is
/// reachable via server-side changes and initial data, never set locally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TriageStatus {
    New,
    Read,
    Closed,
}

impl TriageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriageStatus::New => "new",
            TriageStatus::Read => "read",
            TriageStatus::Closed => "closed",
        }
    }

    /// Next value for the admin toggle: closed reopens to new, anything else
    /// closes.
    pub fn toggled(&self) -> Self {
        match self {
            TriageStatus::Closed => TriageStatus::New,
            _ => TriageStatus::Closed,
        }
    }
}
