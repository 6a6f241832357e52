use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tokio::sync::Mutex;

use crate::models::{Booking, BookingStatus, TriageStatus};
use crate::services::api::BookingApi;

/// Status filter value meaning "no filtering".
pub const FILTER_ALL: &str = "all";

/// In-memory snapshot of the booking collection the admin console works on.
///
/// The remote API owns the data; the board only mirrors it. `update_status`
/// patches the matching record in place, `toggle_triage` refetches the whole
/// collection. The two refresh strategies are deliberately different.
pub struct TriageBoard {
    bookings: Mutex<Vec<Booking>>,
    refreshing: AtomicBool,
}

impl Default for TriageBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageBoard {
    pub fn new() -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
            refreshing: AtomicBool::new(false),
        }
    }

    /// Current snapshot, in server order.
    pub async fn snapshot(&self) -> Vec<Booking> {
        self.bookings.lock().await.clone()
    }

    /// True until the first successful fetch.
    pub async fn is_empty(&self) -> bool {
        self.bookings.lock().await.is_empty()
    }

    /// Fetches the full collection and replaces the snapshot.
    ///
    /// Fetch failures are logged and leave the previous snapshot in place.
    /// At most one refresh runs at a time; a refresh requested while another
    /// is in flight is dropped rather than queued.
    pub async fn refresh(&self, api: &dyn BookingApi) {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("refresh already in flight, skipping");
            return;
        }

        match api.list_bookings().await {
            Ok(bookings) => {
                let mut guard = self.bookings.lock().await;
                tracing::info!(count = bookings.len(), "refreshed booking snapshot");
                *guard = bookings;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch bookings, keeping stale snapshot");
            }
        }

        self.refreshing.store(false, Ordering::SeqCst);
    }

    /// Sets the appointment status of one booking.
    ///
    /// On server-confirmed success, only the matching record's `status` and
    /// `updated_at` change locally; nothing else is touched and no refetch
    /// happens. Returns whether the mutation was applied.
    pub async fn update_status(
        &self,
        api: &dyn BookingApi,
        id: i64,
        new_status: BookingStatus,
    ) -> bool {
        match api.update_status(id, new_status).await {
            Ok(true) => {
                let mut guard = self.bookings.lock().await;
                if let Some(booking) = guard.iter_mut().find(|b| b.id == id) {
                    booking.status = new_status;
                    booking.updated_at = Utc::now().naive_utc();
                }
                tracing::info!(id, status = new_status.as_str(), "booking status updated");
                true
            }
            Ok(false) => {
                tracing::warn!(id, "status update rejected by server");
                false
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "status update failed");
                false
            }
        }
    }

    /// Flips the triage state of one booking between closed and open.
    ///
    /// Anything not closed becomes closed; closed reopens to new. The `read`
    /// state is never set from here. On server-confirmed success the whole
    /// snapshot is refetched. Returns the value the record was toggled to,
    /// or `None` if the booking is unknown or the call failed.
    pub async fn toggle_triage(&self, api: &dyn BookingApi, id: i64) -> Option<TriageStatus> {
        let current = {
            let guard = self.bookings.lock().await;
            guard.iter().find(|b| b.id == id).map(|b| b.is_view)?
        };
        let next = current.toggled();

        match api.mark_read(id).await {
            Ok(true) => {
                tracing::info!(id, to = next.as_str(), "triage state toggled");
                self.refresh(api).await;
                Some(next)
            }
            Ok(false) => {
                tracing::warn!(id, "triage toggle rejected by server");
                None
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "triage toggle failed");
                None
            }
        }
    }
}

/// Status filter and free-text search over the full collection, composed
/// with AND. `search` matches case-insensitively as a substring of name,
/// email, service, organisation or lawyer.
pub fn filter_bookings(bookings: &[Booking], status_filter: &str, search: &str) -> Vec<Booking> {
    let needle = search.trim().to_lowercase();
    bookings
        .iter()
        .filter(|b| status_filter == FILTER_ALL || b.status.as_str() == status_filter)
        .filter(|b| {
            needle.is_empty()
                || [
                    &b.full_name,
                    &b.email,
                    &b.service_name,
                    &b.organisation,
                    &b.preferred_lawyer,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Offset slice of an already-filtered list. `page` is 1-indexed; a page
/// past the end is empty. Returns the page and the total page count.
pub fn paginate(filtered: &[Booking], page: usize, page_size: usize) -> (Vec<Booking>, usize) {
    let page_size = page_size.max(1);
    let total_pages = filtered.len().div_ceil(page_size);
    let start = page.saturating_sub(1) * page_size;
    let slice = filtered
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();
    (slice, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn make_booking(id: i64, name: &str, status: BookingStatus) -> Booking {
        Booking {
            id,
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone_no: "555-0100".to_string(),
            organisation: String::new(),
            service_name: "Family Law".to_string(),
            preferred_lawyer: "Any Available Lawyer".to_string(),
            message: "Need advice".to_string(),
            date: "2025-03-01".to_string(),
            time: "14:30".to_string(),
            reschedule_date: None,
            reschedule_time: None,
            status,
            is_view: TriageStatus::New,
            created_at: dt("2025-01-01 09:00"),
            updated_at: dt("2025-01-01 09:00"),
        }
    }

    #[test]
    fn test_filter_all_empty_search_is_identity() {
        let bookings: Vec<Booking> = (1..=5)
            .map(|i| make_booking(i, &format!("Client {i}"), BookingStatus::New))
            .collect();
        let filtered = filter_bookings(&bookings, FILTER_ALL, "");
        assert_eq!(filtered.len(), 5);
        for (a, b) in bookings.iter().zip(&filtered) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_filter_by_status() {
        let bookings = vec![
            make_booking(1, "A", BookingStatus::New),
            make_booking(2, "B", BookingStatus::Accepted),
            make_booking(3, "C", BookingStatus::Accepted),
        ];
        let filtered = filter_bookings(&bookings, "accepted", "");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|b| b.status == BookingStatus::Accepted));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let bookings = vec![
            make_booking(1, "John Smith", BookingStatus::New),
            make_booking(2, "Mary Jones", BookingStatus::New),
        ];
        let filtered = filter_bookings(&bookings, FILTER_ALL, "SMITH");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_search_spans_fields() {
        let mut booking = make_booking(1, "John Smith", BookingStatus::New);
        booking.organisation = "Acme Holdings".to_string();
        let bookings = vec![booking, make_booking(2, "Mary Jones", BookingStatus::New)];

        assert_eq!(filter_bookings(&bookings, FILTER_ALL, "acme").len(), 1);
        assert_eq!(filter_bookings(&bookings, FILTER_ALL, "family").len(), 2);
        assert_eq!(filter_bookings(&bookings, FILTER_ALL, "nomatch").len(), 0);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let bookings = vec![
            make_booking(1, "John Smith", BookingStatus::New),
            make_booking(2, "Jane Smith", BookingStatus::Accepted),
        ];
        let filtered = filter_bookings(&bookings, "accepted", "smith");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_paginate_23_records_page_size_10() {
        let bookings: Vec<Booking> = (1..=23)
            .map(|i| make_booking(i, &format!("Client {i}"), BookingStatus::New))
            .collect();

        let (page1, total) = paginate(&bookings, 1, 10);
        assert_eq!(total, 3);
        assert_eq!(page1.len(), 10);
        assert_eq!(page1[0].id, 1);

        let (page3, _) = paginate(&bookings, 3, 10);
        assert_eq!(page3.len(), 3);
        assert_eq!(page3[0].id, 21);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let bookings = vec![make_booking(1, "A", BookingStatus::New)];
        let (page, total) = paginate(&bookings, 5, 10);
        assert_eq!(total, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_paginate_empty_list() {
        let (page, total) = paginate(&[], 1, 10);
        assert!(page.is_empty());
        assert_eq!(total, 0);
    }
}
