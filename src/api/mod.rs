//! HTTP API for the elapsed work time engine.
//!
//! This module provides the axum router, request/response types, and
//! shared state for the `/elapsed` endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ElapsedRequest, ParsedElapsedRequest};
pub use response::{ApiError, ApiErrorResponse, ElapsedResponse};
pub use state::AppState;
