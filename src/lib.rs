//! schooldir - A location-aware school directory service
//!
//! Records schools (name, address, coordinates) and lists them ranked by
//! great-circle distance from a caller-supplied point.

pub mod cli;
pub mod geo;
pub mod http_server;
pub mod observability;
pub mod school;
pub mod store;
