// View axis module
// Resolves board columns: stylists for one day, or seven days for one stylist

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::appointment::Appointment;
use crate::models::resource::Stylist;

/// How the displayed week aligns to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekStart {
    /// The week begins on the reference date itself.
    Rolling,
    /// The week snaps back to the most recent occurrence of this weekday,
    /// the reference date included.
    Fixed(Weekday),
}

impl WeekStart {
    /// First displayed date for a given reference date.
    pub fn align(self, reference: NaiveDate) -> NaiveDate {
        match self {
            Self::Rolling => reference,
            Self::Fixed(day) => {
                let distance = day.num_days_from_sunday() as i64
                    - reference.weekday().num_days_from_sunday() as i64;
                let diff = if distance > 0 { distance - 7 } else { distance };
                reference + Duration::days(diff)
            }
        }
    }
}

/// The stylist+date pair identifying one board column; the unit over which
/// overlap and layout are computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnKey {
    pub stylist_id: String,
    pub date: NaiveDate,
}

impl ColumnKey {
    pub fn new(stylist_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            stylist_id: stylist_id.into(),
            date,
        }
    }

    /// Whether an appointment belongs to this column.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        appointment.stylist_id == self.stylist_id && appointment.date == self.date
    }
}

/// One resolved board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: ColumnKey,
    pub title: String,
}

/// Which axis the board's columns run along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAxis {
    /// Team view: one column per stylist, all on a single date.
    Resource { date: NaiveDate },
    /// My-week view: seven consecutive date columns for one stylist.
    Week {
        stylist_id: String,
        reference: NaiveDate,
        week_start: WeekStart,
    },
}

impl ViewAxis {
    /// Resolve the ordered column list for this axis.
    pub fn columns(&self, stylists: &[Stylist]) -> Vec<Column> {
        match self {
            Self::Resource { date } => stylists
                .iter()
                .map(|stylist| Column {
                    key: ColumnKey::new(stylist.id.clone(), *date),
                    title: stylist.name.clone(),
                })
                .collect(),
            Self::Week {
                stylist_id,
                reference,
                week_start,
            } => {
                let start = week_start.align(*reference);
                (0..7)
                    .map(|offset| {
                        let date = start + Duration::days(offset);
                        Column {
                            key: ColumnKey::new(stylist_id.clone(), date),
                            title: date.format("%a %-d").to_string(),
                        }
                    })
                    .collect()
            }
        }
    }

    /// Shift forward one week. A defined no-op on the resource axis.
    pub fn next(&self) -> Self {
        self.shift_weeks(1)
    }

    /// Shift back one week. A defined no-op on the resource axis.
    pub fn previous(&self) -> Self {
        self.shift_weeks(-1)
    }

    fn shift_weeks(&self, weeks: i64) -> Self {
        match self {
            Self::Resource { .. } => self.clone(),
            Self::Week {
                stylist_id,
                reference,
                week_start,
            } => Self::Week {
                stylist_id: stylist_id.clone(),
                reference: *reference + Duration::days(7 * weeks),
                week_start: *week_start,
            },
        }
    }
}
