//! PlantUML sequence-diagram translator.

use tracelens_rules::{ArrowStyle, NotePosition, Participant, ParticipantKind};

use crate::element::{ElementKind, ResolvedElement};

use super::SyntaxTranslator;

/// PlantUML grammar (`.pu` source, `@startuml`/`@enduml` envelope).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUml;

fn keyword(kind: ParticipantKind) -> &'static str {
    match kind {
        ParticipantKind::Actor => "actor",
        ParticipantKind::Database => "database",
        ParticipantKind::Queue => "queue",
        ParticipantKind::Entity => "entity",
        ParticipantKind::Boundary => "boundary",
        ParticipantKind::Control => "control",
        ParticipantKind::Collections => "collections",
        ParticipantKind::Participant | ParticipantKind::Other => "participant",
    }
}

fn arrow(style: ArrowStyle) -> &'static str {
    match style {
        ArrowStyle::Dashed => "-->",
        ArrowStyle::Async => "->>",
        ArrowStyle::Dotted => "..>",
        ArrowStyle::Response => "-->",
        ArrowStyle::Solid => "->",
    }
}

fn note_position(position: NotePosition) -> &'static str {
    match position {
        NotePosition::Left => "left of",
        NotePosition::Right => "right of",
        NotePosition::Over => "over",
    }
}

impl SyntaxTranslator for PlantUml {
    fn header(&self, title: Option<&str>) -> String {
        match title {
            Some(title) if !title.is_empty() => format!("@startuml\ntitle {}", title),
            _ => "@startuml".to_string(),
        }
    }

    fn participants(&self, participants: &[Participant]) -> String {
        participants
            .iter()
            .map(|p| {
                if p.has_alias() {
                    format!("{} \"{}\" as {}", keyword(p.kind), p.label(), p.id)
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
                "{} {} {}: {}",
                element.from,
                arrow(element.arrow_style),
                element.to,
                element.text
            ),
            ElementKind::Note => format!(
                "note {} {}: {}",
                note_position(element.note_position),
                element.from,
                element.text
            ),
            ElementKind::Activate => format!("activate {}", element.from),
            ElementKind::Deactivate => format!("deactivate {}", element.from),
            ElementKind::Divider => format!("== {} ==", element.text),
            ElementKind::Delay => format!("...{}...", element.text),
            ElementKind::Group => format!("group {}", element.text),
            ElementKind::GroupEnd => "end".to_string(),
            ElementKind::Comment => format!("' {}", element.text),
        }
    }

    fn footer(&self) -> String {
        "@enduml".to_string()
    }

    fn file_extension(&self) -> &'static str {
        "pu"
    }
}
