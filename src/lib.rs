// Salon Board Library
// Scheduling board engine: time grid, overlap packing layout, drag-to-reschedule

pub mod drag;
pub mod grid;
pub mod layout;
pub mod models;
pub mod services;
pub mod view;
