//! Rule evaluation engine for the filter/enrichment path.
//!
//! Evaluates every active rule of a section against one record, folding the
//! fired actions into an aggregate [`Evaluation`]:
//! - `include`/`exclude` overwrite the running include flag (last writer wins)
//! - `tag` appends to `tags`, `route` appends to `route_to`
//! - diagram and notification actions are no-ops on this path
//!
//! Evaluation is read-only over the record and carries no state between
//! records, so callers are free to partition a batch across threads.

use std::borrow::Cow;

use tracing::{debug, warn};

use tracelens_core::{Field, SearchResult};

use crate::date_range;
use crate::matcher::MatchTest;
use crate::schema::{ActionType, Rule, Section};

/// Aggregate verdict for one record against one section pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Whether the record is kept. Defaults to true when no rule fires.
    pub include: bool,
    /// Tags accumulated in rule order; duplicates allowed.
    pub tags: Vec<String>,
    /// Route targets accumulated in rule order.
    pub route_to: Vec<String>,
}

impl Default for Evaluation {
    fn default() -> Self {
        Evaluation {
            include: true,
            tags: Vec::new(),
            route_to: Vec::new(),
        }
    }
}

impl Evaluation {
    /// Whether the record survived the section pass.
    pub fn is_included(&self) -> bool {
        self.include
    }
}

/// Evaluate all active rules of a section against one record.
pub fn evaluate<R: SearchResult + ?Sized>(record: &R, section: &Section) -> Evaluation {
    let mut result = Evaluation::default();
    for rule in &section.rules {
        if !rule.is_active() {
            continue;
        }
        if rule_fires(record, rule) {
            debug!(rule = %rule.name, section = %section.name, "rule fired");
            apply_action(rule, &mut result);
        }
    }
    result
}

/// Evaluate one record against several sections in order, folding all fired
/// actions into a single verdict.
pub fn evaluate_sections<R: SearchResult + ?Sized>(
    record: &R,
    sections: &[&Section],
) -> Evaluation {
    let mut result = Evaluation::default();
    for section in sections {
        for rule in &section.rules {
            if !rule.is_active() {
                continue;
            }
            if rule_fires(record, rule) {
                apply_action(rule, &mut result);
            }
        }
    }
    result
}

/// Evaluate a batch of records against one section.
pub fn evaluate_all<R: SearchResult>(records: &[R], section: &Section) -> Vec<Evaluation> {
    records.iter().map(|r| evaluate(r, section)).collect()
}

/// Match/unmatch/date-range test for a single rule.
///
/// Shared with the diagram processor, which applies the same firing
/// semantics to the searchable text.
pub fn rule_fires<R: SearchResult + ?Sized>(record: &R, rule: &Rule) -> bool {
    // Date gate: a failing constraint means the rule does not fire; it never
    // implies an exclude.
    if let Some(spec) = &rule.date_range {
        if !date_range::evaluate(spec, record.log_time()) {
            return false;
        }
    }

    let value = field_value(record, rule.field.as_deref());

    if !MatchTest::new(&rule.match_pattern).is_match(&value) {
        return false;
    }

    // Unmatch veto.
    if let Some(unmatch) = rule.unmatch.as_deref() {
        if !unmatch.is_empty() && MatchTest::new(unmatch).is_match(&value) {
            return false;
        }
    }

    true
}

/// Resolve a rule's field symbol to the record value it matches against.
///
/// Unknown symbols fall back to the searchable raw text.
fn field_value<'a, R: SearchResult + ?Sized>(record: &'a R, symbol: Option<&str>) -> Cow<'a, str> {
    let field = match symbol {
        None => Field::SearchableData,
        Some(symbol) => match Field::parse(symbol) {
            Some(field) => field,
            None => {
                warn!(field = %symbol, "unknown field symbol, falling back to searchable data");
                Field::SearchableData
            }
        },
    };
    field.extract(record)
}

/// Fold one fired rule's action into the running evaluation.
fn apply_action(rule: &Rule, result: &mut Evaluation) {
    let Some(action) = &rule.action else {
        return;
    };
    match action.action_type {
        ActionType::Include => result.include = true,
        ActionType::Exclude => result.include = false,
        ActionType::Tag => {
            if let Some(value) = action.value.as_deref().or(action.text.as_deref()) {
                result.tags.push(value.to_string());
            }
        }
        ActionType::Route => {
            if let Some(target) = action.processor.as_deref().or(action.value.as_deref()) {
                result.route_to.push(target.to_string());
            }
        }
        // Diagram elements, notifications, and unrecognized types are
        // reserved for other pipeline stages.
        _ => {}
    }
}
