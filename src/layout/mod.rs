// Layout module
// Overlap detection and column-packing layout for one board column

pub mod geometry;
pub mod overlap;
pub mod packing;

pub use geometry::{appointment_rect, slot_rect, LANE_GUTTER, SLOT_HEIGHT};
pub use overlap::overlaps;
pub use packing::{column_layout, LaneAssignment};
