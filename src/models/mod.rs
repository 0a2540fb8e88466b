// Module exports for models

pub mod appointment;
pub mod booking;
pub mod resource;
