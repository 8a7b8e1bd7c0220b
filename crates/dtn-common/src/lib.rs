//! DT noise analysis common types and errors.
//!
//! This crate provides foundational types shared across the workspace:
//! - The unified error type and result alias
//! - Schema versioning for emitted documents

pub mod error;
pub mod schema;

pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
