// Time grid module
// Discrete slot sequence for a business day, with 12-hour label conversion

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Errors produced by slot label conversion and grid construction.
///
/// A `BadLabel` reaching the layout path indicates a bug: the grid's label
/// format is produced only by this module.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("unrecognized slot label: {0:?}")]
    BadLabel(String),
    #[error("{0} minutes crosses midnight; the grid does not model multi-day spans")]
    CrossesMidnight(u32),
    #[error("invalid grid configuration: {0}")]
    BadConfig(String),
}

/// Business-day boundaries and slot granularity.
///
/// The reference deployment runs 07:30-20:00 at 15 minute slots, but these
/// are configuration, not constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Opening time as minutes from midnight
    pub open_minutes: u32,
    /// Closing time as minutes from midnight (inclusive final slot)
    pub close_minutes: u32,
    /// Slot granularity in minutes
    pub slot_minutes: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            open_minutes: 7 * 60 + 30,
            close_minutes: 20 * 60,
            slot_minutes: 15,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        if self.slot_minutes == 0 {
            return Err(GridError::BadConfig("slot granularity must be positive".into()));
        }
        if self.close_minutes <= self.open_minutes {
            return Err(GridError::BadConfig(
                "closing time must be after opening time".into(),
            ));
        }
        if self.close_minutes >= MINUTES_PER_DAY {
            return Err(GridError::BadConfig(
                "closing time must be before midnight".into(),
            ));
        }
        Ok(())
    }
}

/// Convert a 12-hour slot label ("7:30 AM") to minutes from midnight.
///
/// 12 AM maps to 0, 12 PM to 720, and 1-11 PM add 720. Labels are comparable
/// only through this conversion, never by string order.
pub fn parse_label(label: &str) -> Result<u32, GridError> {
    let bad = || GridError::BadLabel(label.to_string());

    let (time, period) = label.trim().split_once(' ').ok_or_else(bad)?;
    let (hours, minutes) = time.split_once(':').ok_or_else(bad)?;
    let hours: u32 = hours.parse().map_err(|_| bad())?;
    let minutes: u32 = minutes.parse().map_err(|_| bad())?;

    if !(1..=12).contains(&hours) || minutes >= 60 {
        return Err(bad());
    }

    let hours = match period {
        "AM" if hours == 12 => 0,
        "AM" => hours,
        "PM" if hours == 12 => 12,
        "PM" => hours + 12,
        _ => return Err(bad()),
    };

    Ok(hours * 60 + minutes)
}

/// Convert minutes from midnight back to a 12-hour slot label.
///
/// Totals at or past midnight are flagged rather than wrapped into the next
/// day.
pub fn format_label(total_minutes: u32) -> Result<String, GridError> {
    if total_minutes >= MINUTES_PER_DAY {
        return Err(GridError::CrossesMidnight(total_minutes));
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let period = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };

    Ok(format!("{}:{:02} {}", display_hours, minutes, period))
}

/// The ordered sequence of slot labels for one business day, open to close
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    config: GridConfig,
    slots: Vec<String>,
}

impl TimeGrid {
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;

        let mut slots = Vec::new();
        let mut minutes = config.open_minutes;
        while minutes <= config.close_minutes {
            slots.push(format_label(minutes)?);
            minutes += config.slot_minutes;
        }

        Ok(Self { config, slots })
    }

    /// Grid for the reference salon hours (07:30-20:00, 15 minute slots).
    pub fn salon_default() -> Self {
        Self::new(GridConfig::default()).expect("default grid config is valid")
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// All slot labels in display order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ordinal position of a slot label on this grid, or `None` when the
    /// label does not lie on the grid.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == label)
    }

    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Legal blocked-time durations starting at `label`: every multiple of
    /// the granularity from one slot up to closing.
    pub fn block_durations_from(&self, label: &str) -> Vec<u32> {
        let Some(start_index) = self.index_of(label) else {
            return Vec::new();
        };
        let remaining = self.slots.len() - start_index;
        (1..=remaining as u32).map(|i| i * self.config.slot_minutes).collect()
    }
}
