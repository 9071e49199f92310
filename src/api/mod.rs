//! API Module
//!
//! HTTP handlers and routing for the release finder REST API.
//!
//! # Endpoints
//! - `GET /releases/:month/:day` - Albums and movies released on a day
//! - `GET /stats` - Result cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
