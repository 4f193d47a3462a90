//! JSON rule schema types with serde deserialization.
//!
//! Defines the complete type hierarchy for rule documents:
//! - `RuleFile`: one parsed rule file (title, participants, sections)
//! - `Section`: purpose-tagged, provider-scoped group of rules
//! - `Rule`: match/unmatch/action triple with optional field and date range
//! - `Action`: discriminated action with type-specific parameters
//!
//! All types are plain immutable data once deserialized; the loader builds
//! them and the engine/processor only ever read them.

mod action;
mod participant;
mod purpose;
mod rule;

pub use action::*;
pub use participant::*;
pub use purpose::*;
pub use rule::*;
