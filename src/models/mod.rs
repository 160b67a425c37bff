//! Models Module
//!
//! Response DTOs for the HTTP API.

mod responses;

pub use responses::{HealthResponse, StatsResponse};
