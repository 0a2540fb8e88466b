// Booking module
// Client selection for a new appointment, and the service catalog

use serde::{Deserialize, Serialize};

/// Who a new appointment is for.
///
/// Either a reference to an existing client record or a draft for a client
/// being created inline from the booking form. Modeling this as a variant
/// keeps "half-filled new client plus an id" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingClient {
    Existing {
        client_id: String,
    },
    NewDraft {
        first_name: String,
        last_name: String,
        phone: String,
    },
}

impl BookingClient {
    pub fn is_existing(&self) -> bool {
        matches!(self, Self::Existing { .. })
    }

    /// Validate that the selection can back a booking.
    ///
    /// A draft needs first name, last name and phone before the form may
    /// submit, matching the front desk's required fields.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Existing { client_id } => {
                if client_id.trim().is_empty() {
                    return Err("Client reference cannot be empty".to_string());
                }
            }
            Self::NewDraft {
                first_name,
                last_name,
                phone,
            } => {
                if first_name.trim().is_empty() || last_name.trim().is_empty() {
                    return Err("New client needs a first and last name".to_string());
                }
                if phone.trim().is_empty() {
                    return Err("New client needs a phone number".to_string());
                }
            }
        }
        Ok(())
    }

    /// Display name for a draft client; existing clients are looked up in
    /// the external client store.
    pub fn draft_name(&self) -> Option<String> {
        match self {
            Self::Existing { .. } => None,
            Self::NewDraft {
                first_name,
                last_name,
                ..
            } => Some(format!("{} {}", first_name, last_name)),
        }
    }
}

/// Format a raw phone entry as "(xxx) xxx-xxxx", passing short prefixes
/// through as typed.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!(
            "({}) {}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..digits.len().min(10)]
        ),
    }
}

/// A bookable service with its standard price and chair time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub name: String,
    pub price: f64,
    pub duration_minutes: u32,
}

impl ServiceOffering {
    pub fn new(name: impl Into<String>, price: f64, duration_minutes: u32) -> Self {
        Self {
            name: name.into(),
            price,
            duration_minutes,
        }
    }
}

/// The default salon service menu.
pub fn default_services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering::new("Haircut", 65.0, 45),
        ServiceOffering::new("Color", 120.0, 90),
        ServiceOffering::new("Blowout", 45.0, 30),
        ServiceOffering::new("Highlights", 150.0, 120),
        ServiceOffering::new("Balayage", 180.0, 150),
        ServiceOffering::new("Beard Trim", 30.0, 15),
    ]
}
