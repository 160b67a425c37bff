//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET /cache/:key` - Retrieve the payload stored under a key
//! - `PUT /cache/:key` - Store the request body under a key
//! - `DELETE /cache/:key` - Delete a key
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
