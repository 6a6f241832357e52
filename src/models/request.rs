use serde::Deserialize;

/// Sentinel lawyer id meaning "no specific preference".
pub const ANY_LAWYER: &str = "any";

/// Client-authored appointment request, pre-submission.
///
/// Constructed and validated in one shot at submit time; there is no per-field
/// validation before that. Consumed by value on submission and never retained.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub organisation: String,
    pub case_type_id: String,
    /// Team member id, or [`ANY_LAWYER`].
    #[serde(default)]
    pub lawyer_id: String,
    pub message: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// 24-hour `HH:MM`.
    pub time: String,
}

impl BookingRequest {
    /// Required fields only; the schedule constraints are checked separately.
    pub fn missing_required_field(&self) -> bool {
        self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.case_type_id.trim().is_empty()
            || self.message.trim().is_empty()
    }
}
