//! Domain layer containing the data model and data-access contract.
//!
//! # Architecture
//!
//! - [`url_record`] - The URL record entity and its input types
//! - [`repository`] - The [`repository::UrlRepository`] trait implemented by
//!   the infrastructure layer
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation
//! - The repository trait defines the store contract; a mock implementation
//!   is auto-generated via `mockall` for unit tests

pub mod repository;
pub mod url_record;

pub use repository::UrlRepository;
pub use url_record::{NewUrl, UrlRecord, UrlUpdate};

#[cfg(test)]
pub use repository::MockUrlRepository;
