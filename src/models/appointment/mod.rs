// Appointment module
// Scheduling board appointment model

use chrono::NaiveDate;
use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::grid::{self, GridError};

/// Closed set of appointment statuses.
///
/// `Blocked` occupies grid space like any appointment but cannot hold a
/// client; it is how stylists reserve lunch breaks and personal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Completed,
    Blocked,
    Cancelled,
}

/// Render colors for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub fill: Color32,
    pub border: Color32,
    pub text: Color32,
    pub strikethrough: bool,
}

impl AppointmentStatus {
    pub fn is_blocked(self) -> bool {
        self == Self::Blocked
    }

    /// Rectangle palette for this status.
    ///
    /// Exhaustive on purpose: adding a status without a style is a compile
    /// error, not an unstyled rectangle.
    pub fn style(self) -> StatusStyle {
        match self {
            Self::Confirmed => StatusStyle {
                fill: Color32::from_rgb(209, 250, 229),
                border: Color32::from_rgb(16, 185, 129),
                text: Color32::from_rgb(6, 78, 59),
                strikethrough: false,
            },
            Self::Pending => StatusStyle {
                fill: Color32::from_rgb(231, 229, 228),
                border: Color32::from_rgb(168, 162, 158),
                text: Color32::from_rgb(68, 64, 60),
                strikethrough: false,
            },
            Self::Completed => StatusStyle {
                fill: Color32::from_rgb(245, 245, 244),
                border: Color32::from_rgb(214, 211, 209),
                text: Color32::from_rgb(120, 113, 108),
                strikethrough: true,
            },
            Self::Blocked => StatusStyle {
                fill: Color32::from_rgb(41, 37, 36),
                border: Color32::from_rgb(87, 83, 78),
                text: Color32::from_rgb(214, 211, 209),
                strikethrough: false,
            },
            Self::Cancelled => StatusStyle {
                fill: Color32::from_rgb(254, 226, 226),
                border: Color32::from_rgb(239, 68, 68),
                text: Color32::from_rgb(127, 29, 29),
                strikethrough: false,
            },
        }
    }
}

/// One appointment on the scheduling board.
///
/// The layout engine reads the stylist, date, start slot, duration and
/// status; everything else is opaque payload carried for the UI shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub stylist_id: String,
    pub date: NaiveDate,
    /// Start slot label, e.g. "9:00 AM"
    pub start_label: String,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    pub client_name: String,
    pub client_id: Option<String>,
    pub service: String,
    pub price: f64,
}

impl Appointment {
    /// Create a confirmed appointment with required fields.
    ///
    /// # Arguments
    /// * `id` - Opaque unique id
    /// * `stylist_id` - The stylist/column that owns this appointment
    /// * `date` - Calendar day
    /// * `start_label` - Start slot label ("9:00 AM")
    /// * `duration_minutes` - Must be positive and end before midnight
    pub fn new(
        id: impl Into<String>,
        stylist_id: impl Into<String>,
        date: NaiveDate,
        start_label: impl Into<String>,
        duration_minutes: u32,
    ) -> Result<Self, String> {
        let appointment = Self {
            id: id.into(),
            stylist_id: stylist_id.into(),
            date,
            start_label: start_label.into(),
            duration_minutes,
            status: AppointmentStatus::Confirmed,
            client_name: String::new(),
            client_id: None,
            service: String::new(),
            price: 0.0,
        };
        appointment.validate()?;
        Ok(appointment)
    }

    /// Create a builder for constructing appointments with optional fields
    pub fn builder() -> AppointmentBuilder {
        AppointmentBuilder::new()
    }

    /// Validate the appointment
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Appointment id cannot be empty".to_string());
        }
        if self.stylist_id.trim().is_empty() {
            return Err("Appointment stylist cannot be empty".to_string());
        }
        if self.duration_minutes == 0 {
            return Err("Appointment duration must be positive".to_string());
        }

        let start = grid::parse_label(&self.start_label).map_err(|e| e.to_string())?;
        if start + self.duration_minutes > 24 * 60 {
            return Err("Appointment cannot extend past midnight".to_string());
        }

        Ok(())
    }

    /// Start time as minutes from midnight.
    ///
    /// # Panics
    /// Panics on an unrecognized start label. Labels come from the grid, so
    /// hitting this is a programming error, not a recoverable condition.
    pub fn start_minutes(&self) -> u32 {
        grid::parse_label(&self.start_label)
            .unwrap_or_else(|e| panic!("appointment {}: {}", self.id, e))
    }

    /// End time as minutes from midnight: start plus duration.
    pub fn end_minutes(&self) -> u32 {
        self.start_minutes() + self.duration_minutes
    }

    /// End time as a display label, for the "9:00 AM - 9:45 AM" caption.
    pub fn end_label(&self) -> Result<String, GridError> {
        grid::format_label(self.end_minutes())
    }
}

/// Builder for creating appointments with optional fields
#[derive(Debug, Default)]
pub struct AppointmentBuilder {
    id: Option<String>,
    stylist_id: Option<String>,
    date: Option<NaiveDate>,
    start_label: Option<String>,
    duration_minutes: Option<u32>,
    status: Option<AppointmentStatus>,
    client_name: Option<String>,
    client_id: Option<String>,
    service: Option<String>,
    price: Option<f64>,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn stylist_id(mut self, stylist_id: impl Into<String>) -> Self {
        self.stylist_id = Some(stylist_id.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_label(mut self, start_label: impl Into<String>) -> Self {
        self.start_label = Some(start_label.into());
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: u32) -> Self {
        self.duration_minutes = Some(duration_minutes);
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Build the appointment
    pub fn build(self) -> Result<Appointment, String> {
        let appointment = Appointment {
            id: self.id.ok_or("Appointment id is required")?,
            stylist_id: self.stylist_id.ok_or("Appointment stylist is required")?,
            date: self.date.ok_or("Appointment date is required")?,
            start_label: self.start_label.ok_or("Appointment start slot is required")?,
            duration_minutes: self
                .duration_minutes
                .ok_or("Appointment duration is required")?,
            status: self.status.unwrap_or(AppointmentStatus::Confirmed),
            client_name: self.client_name.unwrap_or_default(),
            client_id: self.client_id,
            service: self.service.unwrap_or_default(),
            price: self.price.unwrap_or(0.0),
        };

        appointment.validate()?;
        Ok(appointment)
    }
}
