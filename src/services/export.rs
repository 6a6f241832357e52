use chrono::NaiveDate;

use crate::models::Booking;

const HEADER: &str = "\"Name\",\"Email\",\"Phone\",\"Organisation\",\"Service\",\"Lawyer\",\
\"Appointment Date\",\"Appointment Time\",\"Status\",\"View Status\",\"Created\"";

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Serializes a filtered booking set to CSV. Every field is double-quoted,
/// with embedded quotes doubled.
pub fn to_csv(bookings: &[Booking]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for b in bookings {
        let row = [
            quote(&b.full_name),
            quote(&b.email),
            quote(&b.phone_no),
            quote(&b.organisation),
            quote(&b.service_name),
            quote(&b.preferred_lawyer),
            quote(&b.date),
            quote(&b.time),
            quote(b.status.as_str()),
            quote(b.is_view.as_str()),
            quote(&b.created_at.format("%Y-%m-%d").to_string()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("booking-appointments-{}.csv", today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, TriageStatus};
    use chrono::NaiveDateTime;

    fn make_booking(name: &str, organisation: &str) -> Booking {
        let now = NaiveDateTime::parse_from_str("2025-01-15 09:00", "%Y-%m-%d %H:%M").unwrap();
        Booking {
            id: 1,
            full_name: name.to_string(),
            email: "jane@example.com".to_string(),
            phone_no: "555-0100".to_string(),
            organisation: organisation.to_string(),
            service_name: "Family Law".to_string(),
            preferred_lawyer: "Any Available Lawyer".to_string(),
            message: "Need advice".to_string(),
            date: "2025-03-01".to_string(),
            time: "14:30".to_string(),
            reschedule_date: None,
            reschedule_time: None,
            status: BookingStatus::New,
            is_view: TriageStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_header_and_row_order() {
        let csv = to_csv(&[make_booking("Jane Doe", "Acme")]);
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("\"Name\",\"Email\""));
        assert_eq!(
            lines.next().unwrap(),
            "\"Jane Doe\",\"jane@example.com\",\"555-0100\",\"Acme\",\"Family Law\",\
\"Any Available Lawyer\",\"2025-03-01\",\"14:30\",\"new\",\"new\",\"2025-01-15\""
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = to_csv(&[make_booking("Jane \"JD\" Doe", "")]);
        assert!(csv.contains("\"Jane \"\"JD\"\" Doe\""));
    }

    #[test]
    fn test_empty_set_is_header_only() {
        let csv = to_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_filename_carries_iso_date() {
        let today = chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(export_filename(today), "booking-appointments-2025-01-15.csv");
    }
}
