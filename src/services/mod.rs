// Module exports for services

pub mod schedule;
