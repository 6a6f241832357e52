use std::sync::OnceLock;

use chrono::{Months, NaiveDate};
use regex::Regex;

use crate::models::{BookingRequest, Catalog, Service, TeamMember, ANY_LAWYER};
use crate::services::api::{BookingApi, NewBookingPayload};

/// Display string used when the client has no lawyer preference.
pub const ANY_LAWYER_LABEL: &str = "Any Available Lawyer";

const GENERIC_FAILURE: &str =
    "Something went wrong while submitting your request. Please try again.";
const DEFAULT_CONFIRMATION: &str = "Your appointment request has been received.";

/// Client-local validation failures. These block submission and never reach
/// the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField,
    InvalidDateFormat,
    PastDate,
    TooFarAhead,
    InvalidTimeFormat,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField => {
                write!(f, "Please fill in all required fields.")
            }
            ValidationError::InvalidDateFormat => {
                write!(f, "Please enter the appointment date as YYYY-MM-DD.")
            }
            ValidationError::PastDate => {
                write!(f, "Please choose a future date for your appointment.")
            }
            ValidationError::TooFarAhead => {
                write!(
                    f,
                    "Appointments can only be booked up to 3 months in advance."
                )
            }
            ValidationError::InvalidTimeFormat => {
                write!(f, "Please enter the time in 24-hour HH:MM format.")
            }
        }
    }
}

/// Outcome of a submission attempt. The request itself is consumed either
/// way; a failed attempt can only be retried from scratch.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    /// Server accepted the booking; carries the confirmation message.
    Confirmed { message: String },
    /// Blocked locally before any network call.
    Rejected(ValidationError),
    /// Server said no, or the call itself failed. Generic message only.
    Failed { message: String },
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap())
}

/// Checks the scheduling constraints on a raw date/time pair.
///
/// Date comparison is date-only; a booking for later today passes. The
/// 3-month cap is enforced here as well, not just at the input widget.
pub fn validate_schedule(date: &str, time: &str, today: NaiveDate) -> Result<(), ValidationError> {
    if date.trim().is_empty() || time.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }

    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDateFormat)?;

    if date < today {
        return Err(ValidationError::PastDate);
    }

    let cap = today
        .checked_add_months(Months::new(3))
        .ok_or(ValidationError::TooFarAhead)?;
    if date > cap {
        return Err(ValidationError::TooFarAhead);
    }

    if !time_pattern().is_match(time.trim()) {
        return Err(ValidationError::InvalidTimeFormat);
    }

    Ok(())
}

/// Label for a case type id, or empty string when the id is unknown.
pub fn resolve_service_name(case_type_id: &str, services: &[Service]) -> String {
    services
        .iter()
        .find(|s| s.id == case_type_id)
        .map(|s| s.name.clone())
        .unwrap_or_default()
}

/// Label for a lawyer id. The sentinel always resolves to the fixed label,
/// regardless of the team list; unknown ids resolve to empty string.
pub fn resolve_lawyer_name(lawyer_id: &str, team: &[TeamMember]) -> String {
    if lawyer_id == ANY_LAWYER {
        return ANY_LAWYER_LABEL.to_string();
    }
    team.iter()
        .find(|m| m.id == lawyer_id)
        .map(|m| m.name.clone())
        .unwrap_or_default()
}

/// Validates and submits a booking request.
///
/// Validation failures abort before any network call. Past that point the
/// body-level `status` flag decides between confirmation and a generic
/// failure; transport errors are logged and collapse to the same generic
/// failure.
pub async fn submit_booking(
    api: &dyn BookingApi,
    catalog: &Catalog,
    request: BookingRequest,
    today: NaiveDate,
) -> SubmissionOutcome {
    if request.missing_required_field() {
        return SubmissionOutcome::Rejected(ValidationError::MissingField);
    }
    if let Err(e) = validate_schedule(&request.date, &request.time, today) {
        return SubmissionOutcome::Rejected(e);
    }

    let payload = NewBookingPayload {
        full_name: request.full_name,
        email: request.email,
        phone_no: request.phone,
        organisation: request.organisation,
        service_name: resolve_service_name(&request.case_type_id, &catalog.services),
        preferred_lawyer: resolve_lawyer_name(&request.lawyer_id, &catalog.team),
        message: request.message,
        date: request.date,
        time: request.time,
    };

    match api.create_booking(&payload).await {
        Ok(outcome) if outcome.accepted => SubmissionOutcome::Confirmed {
            message: outcome
                .message
                .unwrap_or_else(|| DEFAULT_CONFIRMATION.to_string()),
        },
        Ok(outcome) => {
            tracing::warn!(message = ?outcome.message, "booking rejected by server");
            SubmissionOutcome::Failed {
                message: GENERIC_FAILURE.to_string(),
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "booking submission failed");
            SubmissionOutcome::Failed {
                message: GENERIC_FAILURE.to_string(),
            }
        }
    }
}
