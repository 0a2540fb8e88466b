//! Pairwise overlap predicate.
//!
//! Kept separate from the packing algorithm so both the layout and its tests
//! can reason about collision in isolation.

use crate::models::appointment::Appointment;

/// Half-open interval intersection: appointments overlap when each starts
/// before the other ends. Touching boundaries (one ends exactly when the
/// other starts) do not overlap.
pub fn overlaps(a: &Appointment, b: &Appointment) -> bool {
    a.start_minutes() < b.end_minutes() && b.start_minutes() < a.end_minutes()
}
