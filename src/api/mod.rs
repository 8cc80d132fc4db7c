//! REST API layer.
//!
//! Translates HTTP requests into service calls and renders the results as
//! JSON responses.
//!
//! # Modules
//!
//! - [`dto`] - Request and response shapes
//! - [`handlers`] - Endpoint handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
