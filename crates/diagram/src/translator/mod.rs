//! Target-grammar translation strategies.
//!
//! A [`SyntaxTranslator`] turns the intermediate representation (header,
//! participants, elements, footer) into one diagram grammar's text. Both
//! shipped translators are stateless unit structs, so calls can be freely
//! interleaved across independent diagrams.

mod mermaid;
mod plantuml;

pub use mermaid::Mermaid;
pub use plantuml::PlantUml;

use tracelens_rules::Participant;

use crate::element::ResolvedElement;

/// Strategy interface for one output grammar.
pub trait SyntaxTranslator {
    /// Opening lines, including the optional diagram title.
    fn header(&self, title: Option<&str>) -> String;
    /// Participant declaration block; empty string when there are none.
    fn participants(&self, participants: &[Participant]) -> String;
    /// One element as grammar text.
    fn element(&self, element: &ResolvedElement) -> String;
    /// Closing lines; empty string when the grammar has none.
    fn footer(&self) -> String;
    /// Conventional file extension for this grammar's source text.
    fn file_extension(&self) -> &'static str;
}

/// Assemble a complete diagram source text.
///
/// Emits header, participants, elements in order, then footer; empty
/// blocks are skipped so the output never carries blank structural lines.
pub fn render(
    translator: &dyn SyntaxTranslator,
    title: Option<&str>,
    participants: &[Participant],
    elements: &[ResolvedElement],
) -> String {
    let mut lines = Vec::new();
    lines.push(translator.header(title));

    let declared = translator.participants(participants);
    if !declared.is_empty() {
        lines.push(declared);
    }
    for element in elements {
        lines.push(translator.element(element));
    }

    let footer = translator.footer();
    if !footer.is_empty() {
        lines.push(footer);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ruleset_still_renders_valid_plantuml() {
        let out = render(&PlantUml, None, &[], &[]);
        assert_eq!(out, "@startuml\n@enduml\n");
    }

    #[test]
    fn empty_ruleset_still_renders_valid_mermaid() {
        let out = render(&Mermaid, None, &[], &[]);
        assert_eq!(out, "sequenceDiagram\n");
    }

    #[test]
    fn title_lands_in_header() {
        let out = render(&PlantUml, Some("Login flow"), &[], &[]);
        assert!(out.starts_with("@startuml\ntitle Login flow\n"));

        let out = render(&Mermaid, Some("Login flow"), &[], &[]);
        assert!(out.starts_with("sequenceDiagram\ntitle Login flow\n"));
    }
}
