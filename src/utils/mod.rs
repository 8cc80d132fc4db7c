//! Utility functions for identifier generation and URL processing.
//!
//! - [`short_id`] - Short identifier generation
//! - [`redirect_target`] - Read-time scheme prefixing and header escaping
//!   for redirect targets

pub mod redirect_target;
pub mod short_id;
