//! Request and response shapes for the REST API.
//!
//! Serde handles (de)serialization; request DTOs carry `validator` rules
//! checked by the handlers before any service call.

pub mod health;
pub mod shorten;
pub mod update_url;
pub mod url;
