// Drag module
// Pointer-driven drag-to-reschedule state machine

use chrono::NaiveDate;
use egui::{Pos2, Rect, Vec2};

use crate::models::appointment::Appointment;

/// Column/slot identity carried by the cell under the pointer at release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub stylist_id: String,
    pub date: NaiveDate,
    pub slot_label: String,
}

/// The in-flight drag: a snapshot of the appointment being moved plus the
/// pointer geometry needed to render the floating ghost.
///
/// The snapshot, not a live reference, is what gets rewritten on commit, so
/// concurrent store updates cannot disturb an active drag.
#[derive(Debug, Clone)]
pub struct DragSession {
    appointment: Appointment,
    pointer_offset: Vec2,
    pointer: Pos2,
    size: Vec2,
    moved: bool,
}

impl DragSession {
    pub fn appointment_id(&self) -> &str {
        &self.appointment.id
    }

    pub fn appointment(&self) -> &Appointment {
        &self.appointment
    }

    /// Ghost rectangle following the pointer, corrected by the grab offset
    /// so the rectangle does not jump under the cursor.
    pub fn ghost_rect(&self) -> Rect {
        Rect::from_min_size(self.pointer - self.pointer_offset, self.size)
    }
}

/// What a pointer release resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The appointment, rewritten to the drop target's stylist, date and
    /// start slot with every other field untouched. The caller applies it to
    /// the store as an atomic replace-by-id.
    Committed(Appointment),
    /// Press and release with no movement in between: open details instead.
    Clicked(String),
    /// Released over no valid target, or no drag was active. Nothing changes.
    Discarded,
}

/// Two-state (idle/dragging) controller, one per rendered board.
///
/// At most one drag session exists at a time; it is created on pointer-down
/// over an appointment and fully consumed on pointer-up whatever the
/// outcome. Pointer-moves touch only the tracked coordinates.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Ghost rectangle for the active session, if any.
    pub fn ghost(&self) -> Option<Rect> {
        self.session.as_ref().map(DragSession::ghost_rect)
    }

    /// Primary pointer pressed on an appointment rectangle. Ignored while a
    /// session is already active.
    pub fn pointer_down(&mut self, appointment: &Appointment, pointer: Pos2, rect: Rect) {
        if self.session.is_some() {
            return;
        }
        log::debug!("drag begin: appointment {}", appointment.id);
        self.session = Some(DragSession {
            appointment: appointment.clone(),
            pointer_offset: pointer - rect.min,
            pointer,
            size: rect.size(),
            moved: false,
        });
    }

    /// Track the pointer. Idempotent and side-effect free until commit; a
    /// repeated position does not turn a click into a drag.
    pub fn pointer_move(&mut self, pointer: Pos2) {
        if let Some(session) = &mut self.session {
            if pointer != session.pointer {
                session.pointer = pointer;
                session.moved = true;
            }
        }
    }

    /// Pointer released. Consumes the session and resolves the gesture.
    pub fn pointer_up(&mut self, target: Option<&DropTarget>) -> DragOutcome {
        let Some(session) = self.session.take() else {
            return DragOutcome::Discarded;
        };

        if !session.moved {
            log::debug!("drag resolved as click: {}", session.appointment.id);
            return DragOutcome::Clicked(session.appointment.id);
        }

        match target {
            Some(target) => {
                let mut appointment = session.appointment;
                appointment.stylist_id = target.stylist_id.clone();
                appointment.date = target.date;
                appointment.start_label = target.slot_label.clone();
                log::info!(
                    "rescheduled {} to stylist {} on {} at {}",
                    appointment.id,
                    appointment.stylist_id,
                    appointment.date,
                    appointment.start_label
                );
                DragOutcome::Committed(appointment)
            }
            None => {
                log::debug!("drag discarded: {}", session.appointment.id);
                DragOutcome::Discarded
            }
        }
    }
}
