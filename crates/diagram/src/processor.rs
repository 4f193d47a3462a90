//! Diagram rule processor: record stream in, ordered elements out.
//!
//! For each record (stream order), every active rule of the section is
//! tested against the record's searchable text with the same match/unmatch
//! semantics as the filter engine. Each firing rule contributes exactly one
//! element; there is no include/exclude aggregation, so one record may
//! yield several elements. Rules that fire without a usable diagram action
//! yield a visible comment element instead of being dropped, keeping a
//! partially-matching ruleset renderable.

use tracing::debug;

use tracelens_core::SearchResult;
use tracelens_rules::matcher::MatchTest;
use tracelens_rules::{date_range, ArrowStyle, NotePosition, Rule, Section};

use crate::element::{ElementKind, ResolvedElement};
use crate::placeholder;

/// Process a batch of records against one uml-purpose section.
pub fn process<R: SearchResult>(records: &[R], section: &Section) -> Vec<ResolvedElement> {
    let mut elements = Vec::new();
    for record in records {
        process_record(record, section, &mut elements);
    }
    elements
}

/// Append the elements one record contributes, in rule order.
fn process_record<R: SearchResult + ?Sized>(
    record: &R,
    section: &Section,
    elements: &mut Vec<ResolvedElement>,
) {
    let content = record.searchable_data();
    for rule in &section.rules {
        if !rule.is_active() {
            continue;
        }
        if let Some(spec) = &rule.date_range {
            if !date_range::evaluate(spec, record.log_time()) {
                continue;
            }
        }
        let Some(span) = MatchTest::new(&rule.match_pattern).find(content) else {
            continue;
        };
        if let Some(unmatch) = rule.unmatch.as_deref() {
            if !unmatch.is_empty() && MatchTest::new(unmatch).is_match(content) {
                continue;
            }
        }
        debug!(rule = %rule.name, section = %section.name, "diagram rule fired");
        elements.push(build_element(record, rule, content, span.slice(content)));
    }
}

/// Build the element a firing rule contributes.
fn build_element<R: SearchResult + ?Sized>(
    record: &R,
    rule: &Rule,
    content: &str,
    matched: &str,
) -> ResolvedElement {
    let mut element = ResolvedElement {
        kind: ElementKind::Comment,
        from: String::new(),
        to: String::new(),
        text: String::new(),
        arrow_style: ArrowStyle::default(),
        note_position: NotePosition::default(),
        timestamp: record.log_time(),
    };

    let Some(action) = &rule.action else {
        element.text = format!("rule '{}' matched but has no action", rule.name);
        return element;
    };

    match ElementKind::from_action(action.action_type) {
        Some(kind) => {
            element.kind = kind;
            element.from = action.from.clone().unwrap_or_default();
            element.to = action.to.clone().unwrap_or_default();
            element.arrow_style = action.arrow_style;
            element.note_position = action.note_position;
            element.text = action
                .text
                .as_deref()
                .map(|template| placeholder::resolve(template, content, matched))
                .unwrap_or_default();
        }
        None => {
            element.text = format!(
                "rule '{}' matched but its action is not a diagram element",
                rule.name
            );
        }
    }
    element
}
