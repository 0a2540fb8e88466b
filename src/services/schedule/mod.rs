//! Appointment store service.
//!
//! The in-memory ordered collection the board reads from and the two
//! mutation entry points the engine invokes: create (bookings and blocked
//! time) and full replace-by-id update. Durable persistence of this
//! collection lives outside the engine.

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;

use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::booking::{BookingClient, ServiceOffering};
use crate::view::ColumnKey;

/// Fields for a new booking; the store assigns the id.
#[derive(Debug, Clone)]
pub struct AppointmentDraft {
    pub stylist_id: String,
    pub date: NaiveDate,
    pub start_label: String,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    pub client_name: String,
    pub client_id: Option<String>,
    pub service: String,
    pub price: f64,
}

/// Service owning the appointment collection for one salon.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    appointments: Vec<Appointment>,
    next_id: u64,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from existing records, e.g. a deserialized day sheet.
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            next_id: appointments.len() as u64,
            appointments,
        }
    }

    /// Read-only view of the collection, in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Appointments belonging to one board column.
    pub fn for_column(&self, key: &ColumnKey) -> Vec<&Appointment> {
        self.appointments.iter().filter(|a| key.matches(a)).collect()
    }

    /// Create an appointment from a draft. The draft is validated before it
    /// enters the collection; malformed input never reaches layout.
    pub fn create(&mut self, draft: AppointmentDraft) -> Result<&Appointment> {
        let id = self.mint_id();
        let appointment = Appointment {
            id,
            stylist_id: draft.stylist_id,
            date: draft.date,
            start_label: draft.start_label,
            duration_minutes: draft.duration_minutes,
            status: draft.status,
            client_name: draft.client_name,
            client_id: draft.client_id,
            service: draft.service,
            price: draft.price,
        };
        appointment.validate().map_err(|e| anyhow!(e))?;

        log::debug!("created appointment {}", appointment.id);
        self.appointments.push(appointment);
        Ok(self.appointments.last().expect("just pushed"))
    }

    /// Book a service for a client at a slot. The front-desk booking form's
    /// submit path: the client selection is validated first, and a new-client
    /// draft contributes its name while the external client store handles the
    /// actual record.
    pub fn book(
        &mut self,
        stylist_id: impl Into<String>,
        date: NaiveDate,
        start_label: impl Into<String>,
        client: &BookingClient,
        client_name: &str,
        service: &ServiceOffering,
    ) -> Result<&Appointment> {
        client.validate().map_err(|e| anyhow!(e))?;

        let (client_id, client_name) = match client {
            BookingClient::Existing { client_id } => {
                (Some(client_id.clone()), client_name.to_string())
            }
            BookingClient::NewDraft { .. } => {
                let name = client.draft_name().expect("draft has a name");
                (None, name)
            }
        };

        self.create(AppointmentDraft {
            stylist_id: stylist_id.into(),
            date,
            start_label: start_label.into(),
            duration_minutes: service.duration_minutes,
            status: AppointmentStatus::Confirmed,
            client_name,
            client_id,
            service: service.name.clone(),
            price: service.price,
        })
    }

    /// Create a blocked-time entry: occupies grid space like a booking but
    /// holds no client and no price.
    pub fn create_block(
        &mut self,
        stylist_id: impl Into<String>,
        date: NaiveDate,
        start_label: impl Into<String>,
        duration_minutes: u32,
        note: &str,
    ) -> Result<&Appointment> {
        let display = if note.trim().is_empty() {
            "Blocked Time".to_string()
        } else {
            note.trim().to_string()
        };
        self.create(AppointmentDraft {
            stylist_id: stylist_id.into(),
            date,
            start_label: start_label.into(),
            duration_minutes,
            status: AppointmentStatus::Blocked,
            client_name: display,
            client_id: None,
            service: "Blocked".to_string(),
            price: 0.0,
        })
    }

    /// Full replace-by-id. The single atomic mutation a committed drag (or
    /// any edit) applies; no partial states are observable.
    pub fn update(&mut self, updated: Appointment) -> Result<()> {
        updated.validate().map_err(|e| anyhow!(e))?;

        let Some(slot) = self.appointments.iter_mut().find(|a| a.id == updated.id) else {
            bail!("no appointment with id {}", updated.id);
        };
        log::debug!("updated appointment {}", updated.id);
        *slot = updated;
        Ok(())
    }

    /// Remove an appointment; returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);
        let removed = self.appointments.len() < before;
        if removed {
            log::debug!("deleted appointment {}", id);
        }
        removed
    }

    fn mint_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("appt-{}", self.next_id);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
