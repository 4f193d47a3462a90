//! Section purpose tags.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Pipeline stage a section applies to.
///
/// Parsed case-insensitively from the wire; anything unrecognized becomes
/// [`Purpose::Unknown`], which no stage ever selects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Purpose {
    /// Include/exclude decisions over the record stream.
    #[default]
    Filter,
    /// Tagging and routing without filtering.
    Enrichment,
    /// Sequence-diagram element synthesis.
    Uml,
    /// Output formatting hooks.
    Output,
    /// Unrecognized tag, preserved for diagnostics.
    Unknown(String),
}

impl Purpose {
    /// Parse a purpose tag, case-insensitively.
    pub fn parse(tag: &str) -> Purpose {
        match tag.to_ascii_lowercase().as_str() {
            "filter" => Purpose::Filter,
            "enrichment" => Purpose::Enrichment,
            "uml" => Purpose::Uml,
            "output" => Purpose::Output,
            _ => Purpose::Unknown(tag.to_string()),
        }
    }

    /// Wire representation of this tag.
    pub fn as_str(&self) -> &str {
        match self {
            Purpose::Filter => "filter",
            Purpose::Enrichment => "enrichment",
            Purpose::Uml => "uml",
            Purpose::Output => "output",
            Purpose::Unknown(tag) => tag,
        }
    }
}

impl Serialize for Purpose {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Purpose {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Purpose::parse(&tag))
    }
}
