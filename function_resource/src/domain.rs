//! Domain records, ports and lifecycle services for function resources

pub mod models;
pub mod ports;
pub mod services;
