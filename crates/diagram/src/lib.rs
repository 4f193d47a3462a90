//! Sequence-diagram synthesis from matched log records.
//!
//! This crate provides:
//! - Placeholder resolver for action text templates (`{afterMatch}` family)
//! - Diagram rule processor turning a record stream into ordered elements
//! - `SyntaxTranslator` strategy with PlantUML and Mermaid implementations
//! - `render` assembly producing complete diagram source text

pub mod element;
pub mod placeholder;
pub mod processor;
pub mod translator;

pub use element::{ElementKind, ResolvedElement};
pub use processor::process;
pub use translator::{render, Mermaid, PlantUml, SyntaxTranslator};
