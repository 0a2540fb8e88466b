// Test fixtures - reusable test data
// Provides consistent board data across test files

use chrono::NaiveDate;
use salon_board::models::appointment::{Appointment, AppointmentStatus};
use salon_board::models::resource::Stylist;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, March 10, 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// Tuesday, March 11, 2025
    pub fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()
    }
}

/// The two-chair test salon
pub fn team() -> Vec<Stylist> {
    vec![Stylist::new("1", "Jordan"), Stylist::new("2", "Casey")]
}

/// A confirmed appointment on stylist 1's Monday column
pub fn appointment(id: &str, start_label: &str, duration_minutes: u32) -> Appointment {
    Appointment::builder()
        .id(id)
        .stylist_id("1")
        .date(dates::monday())
        .start_label(start_label)
        .duration_minutes(duration_minutes)
        .status(AppointmentStatus::Confirmed)
        .client_name("Dana Reyes")
        .service("Haircut")
        .price(65.0)
        .build()
        .unwrap()
}
