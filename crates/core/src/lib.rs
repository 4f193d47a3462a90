//! Core record model for the tracelens pipeline.
//!
//! This crate provides:
//! - `SearchResult` read-only accessor trait over one log record
//! - `LogRecord` owned record value implementing it
//! - `Field` symbolic field names with accessor dispatch

pub mod field;
pub mod record;

pub use field::Field;
pub use record::{LogRecord, SearchResult};
