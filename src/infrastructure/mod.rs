//! Infrastructure layer.
//!
//! Concrete implementations of the contracts the domain layer defines.
//!
//! # Modules
//!
//! - [`persistence`] - URL repository implementations

pub mod persistence;
