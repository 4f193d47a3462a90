//! JSON rule DSL for log-record filtering, enrichment, and diagram synthesis.
//!
//! This crate provides:
//! - JSON rule schema with serde deserialization (sections, rules, actions)
//! - Multi-file loader with section concatenation and purpose filtering
//! - Match/unmatch test with regex-to-substring degrade
//! - Date-range constraints (absolute and relative bounds)
//! - Rule evaluation engine producing include/exclude + tag + route verdicts

pub mod date_range;
pub mod engine;
pub mod loader;
pub mod matcher;
pub mod schema;

pub use engine::Evaluation;
pub use loader::{RuleFileError, RuleSet};
pub use schema::*;
