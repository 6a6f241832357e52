pub mod booking;
pub mod catalog;
pub mod request;

pub use booking::{Booking, BookingStatus, TriageStatus};
pub use catalog::{Catalog, Service, TeamMember};
pub use request::{BookingRequest, ANY_LAWYER};
