//! Repository implementations.
//!
//! Concrete implementations of the domain repository trait: PostgreSQL via
//! SQLx for production, and an in-process table for tests.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL storage backed by PostgreSQL
//! - [`MemoryUrlRepository`] - URL storage backed by an in-process table

pub mod memory;
pub mod pg;

pub use memory::MemoryUrlRepository;
pub use pg::PgUrlRepository;
