//! Diagram participants declared at the rule-file level.

use serde::{Deserialize, Serialize};

/// Participant rendering kind.
///
/// PlantUML supports the full set; Mermaid collapses everything but
/// `actor` onto `participant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantKind {
    #[default]
    Participant,
    Actor,
    Database,
    Queue,
    Entity,
    Boundary,
    Control,
    Collections,
    #[serde(other)]
    Other,
}

/// One declared diagram participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable key referenced by action `from`/`to`.
    pub id: String,
    /// Optional human-readable label.
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ParticipantKind,
}

impl Participant {
    /// Label to render: the display name when present and distinct,
    /// otherwise the id.
    pub fn label(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }

    /// Whether the display name differs from the id and needs an alias
    /// clause in the output grammar.
    pub fn has_alias(&self) -> bool {
        self.display_name
            .as_deref()
            .is_some_and(|name| !name.is_empty() && name != self.id)
    }
}
