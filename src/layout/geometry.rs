//! Pixel placement of appointment rectangles within a column.
//!
//! Vertical position is a pure function of start time and duration; it does
//! not depend on clustering. Horizontal position comes from the lane
//! assignment computed by [`super::packing`].

use egui::{pos2, vec2, Rect};

use crate::grid::TimeGrid;
use crate::layout::packing::LaneAssignment;
use crate::models::appointment::Appointment;

/// Default slot row height in pixels.
pub const SLOT_HEIGHT: f32 = 48.0;

/// Horizontal inset between lanes so adjacent rectangles read as separate.
pub const LANE_GUTTER: f32 = 2.0;

/// Rectangle of one slot row inside a column, for drop-target hit areas and
/// the hour striping.
pub fn slot_rect(column: Rect, slot_index: usize, row_height: f32) -> Rect {
    Rect::from_min_size(
        pos2(column.left(), column.top() + slot_index as f32 * row_height),
        vec2(column.width(), row_height),
    )
}

/// Rectangle for one appointment inside its column.
///
/// The top offset and height scale linearly with minutes from opening and
/// duration; rectangles running past closing are clamped to the column's
/// bottom edge rather than overflowing the grid.
pub fn appointment_rect(
    column: Rect,
    appointment: &Appointment,
    lane: LaneAssignment,
    grid: &TimeGrid,
    row_height: f32,
) -> Rect {
    let config = grid.config();
    let minutes_from_open = appointment.start_minutes().saturating_sub(config.open_minutes);
    let rows_from_open = minutes_from_open as f32 / config.slot_minutes as f32;
    let duration_rows = appointment.duration_minutes as f32 / config.slot_minutes as f32;

    let top = column.top() + rows_from_open * row_height;
    let bottom = (top + duration_rows * row_height).min(column.bottom());

    let left = column.left() + lane.left() * column.width() + LANE_GUTTER;
    let width = lane.width() * column.width() - 2.0 * LANE_GUTTER;

    Rect::from_min_size(pos2(left, top), vec2(width, bottom - top))
}
