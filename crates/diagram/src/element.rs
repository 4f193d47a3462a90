//! Intermediate diagram elements, independent of target syntax.

use chrono::{DateTime, Utc};

use tracelens_rules::{ActionType, ArrowStyle, NotePosition};

/// Kind of diagram element a fired rule produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Message,
    Note,
    Activate,
    Deactivate,
    Divider,
    Delay,
    Group,
    GroupEnd,
    /// Visible placeholder for rules with no usable diagram action.
    Comment,
}

impl ElementKind {
    /// Map a rule action type to an element kind, when it is one.
    pub fn from_action(action_type: ActionType) -> Option<ElementKind> {
        match action_type {
            ActionType::Message => Some(ElementKind::Message),
            ActionType::Note => Some(ElementKind::Note),
            ActionType::Activate => Some(ElementKind::Activate),
            ActionType::Deactivate => Some(ElementKind::Deactivate),
            ActionType::Divider => Some(ElementKind::Divider),
            ActionType::Delay => Some(ElementKind::Delay),
            ActionType::Group => Some(ElementKind::Group),
            ActionType::GroupEnd => Some(ElementKind::GroupEnd),
            _ => None,
        }
    }
}

/// One fully placeholder-resolved diagram line.
///
/// Produced fresh per (record, firing rule) pair; element order equals
/// discovery order, which keeps rendered diagrams temporally ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedElement {
    pub kind: ElementKind,
    /// Sending participant id; empty when the element has none.
    pub from: String,
    /// Receiving participant id; empty when the element has none.
    pub to: String,
    /// Fully resolved text (placeholders already substituted).
    pub text: String,
    pub arrow_style: ArrowStyle,
    pub note_position: NotePosition,
    /// Timestamp of the source record.
    pub timestamp: DateTime<Utc>,
}
