//! Application layer.
//!
//! Orchestrates domain operations behind the repository trait, exposing a
//! small API the HTTP handlers call into.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - short URL creation, resolution,
//!   and management

pub mod services;
