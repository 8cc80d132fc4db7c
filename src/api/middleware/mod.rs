//! Middleware applied around the router.

pub mod tracing;
