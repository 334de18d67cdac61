//! Sends one GET request to a login endpoint and reports the status, body length and a short
//! body preview. Transport failures are reported as a single error line.

pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod telemetry;
