//! Mermaid sequence-diagram translator.

use tracelens_rules::{ArrowStyle, NotePosition, Participant, ParticipantKind};

use crate::element::{ElementKind, ResolvedElement};

use super::SyntaxTranslator;

/// Mermaid grammar (`.mmd` source, `sequenceDiagram` header, no footer).
#[derive(Debug, Clone, Copy, Default)]
pub struct Mermaid;

fn keyword(kind: ParticipantKind) -> &'static str {
    // Mermaid only distinguishes actors; everything else renders as a
    // plain participant.
    match kind {
        ParticipantKind::Actor => "actor",
        _ => "participant",
    }
}

fn arrow(style: ArrowStyle) -> &'static str {
    match style {
        ArrowStyle::Dashed => "-->>",
        ArrowStyle::Async => "-)+",
        ArrowStyle::Dotted => "-->>",
        ArrowStyle::Response => "-->>",
        ArrowStyle::Solid => "->>",
    }
}

fn note_position(position: NotePosition) -> &'static str {
    match position {
        NotePosition::Left => "left of",
        NotePosition::Right => "right of",
        NotePosition::Over => "over",
    }
}

/// Escape text for embedding in mermaid message/note lines.
fn escape(text: &str) -> String {
    text.replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl SyntaxTranslator for Mermaid {
    fn header(&self, title: Option<&str>) -> String {
        match title {
            Some(title) if !title.is_empty() => format!("sequenceDiagram\ntitle {}", title),
            _ => "sequenceDiagram".to_string(),
        }
    }

    fn participants(&self, participants: &[Participant]) -> String {
        participants
            .iter()
            .map(|p| {
                if p.has_alias() {
                    format!("{} {} as {}", keyword(p.kind), p.id, p.label())
                } else {
                    format!("{} {}", keyword(p.kind), p.id)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn element(&self, element: &ResolvedElement) -> String {
        match element.kind {
            ElementKind::Message => format!(
                "{}{}{}: {}",
                element.from,
                arrow(element.arrow_style),
                element.to,
                escape(&element.text)
            ),
            ElementKind::Note => format!(
                "Note {} {}: {}",
                note_position(element.note_position),
                element.from,
                escape(&element.text)
            ),
            ElementKind::Activate => format!("activate {}", element.from),
            ElementKind::Deactivate => format!("deactivate {}", element.from),
            ElementKind::Group => "rect rgb(200,200,200)".to_string(),
            ElementKind::GroupEnd => "end".to_string(),
            // Mermaid has no divider/delay syntax; keep them visible as
            // comments so the diagram still renders.
            ElementKind::Divider | ElementKind::Delay | ElementKind::Comment => {
                format!("%% {}", escape(&element.text))
            }
        }
    }

    fn footer(&self) -> String {
        String::new()
    }

    fn file_extension(&self) -> &'static str {
        "mmd"
    }
}
