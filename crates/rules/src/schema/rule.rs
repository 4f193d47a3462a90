//! Rule file root, sections, rules, and date-range constraints.

use serde::{Deserialize, Serialize};

use super::{Action, Participant, Purpose};

/// One parsed rule file.
///
/// Absent top-level keys are not an error; they default to empty
/// collections so a minimal file can carry just `sections`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A named, purpose-tagged group of rules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub purpose: Purpose,
    /// Provider/source names this section applies to; empty = all providers.
    #[serde(default)]
    pub providers: Vec<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Section {
    /// Whether this section applies to records from the given provider.
    pub fn applies_to_provider(&self, provider: &str) -> bool {
        self.providers.is_empty()
            || self
                .providers
                .iter()
                .any(|p| p.eq_ignore_ascii_case(provider))
    }
}

/// One match/unmatch/action triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Informational only; used in log output.
    #[serde(default)]
    pub name: String,
    /// Symbolic field to match against; absent = searchable raw text.
    #[serde(default)]
    pub field: Option<String>,
    /// Pattern or substring that must be found for the rule to fire.
    #[serde(rename = "match", default)]
    pub match_pattern: String,
    /// Pattern or substring that vetoes a positive match.
    #[serde(default)]
    pub unmatch: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(rename = "dateRange", default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub action: Option<Action>,
}

fn default_enabled() -> bool {
    true
}

impl Rule {
    /// A rule can only ever fire when enabled and carrying a non-empty
    /// match pattern.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.match_pattern.is_empty()
    }
}

/// Time window constraint on a rule.
///
/// All present bounds must hold (AND). Bounds are strings on the wire:
/// `withinLast` takes `"<N><unit>"` with unit `h`/`d`/`m`; `after` and
/// `before` take an ISO-8601 timestamp or a now-relative `"-<N><unit>"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "withinLast", default)]
    pub within_last: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}
