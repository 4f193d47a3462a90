//! Rule actions: the effect a firing rule has on the pipeline.

use serde::{Deserialize, Serialize};

/// Action discriminator.
///
/// The filter/enrichment engine executes `include`/`exclude`/`tag`/`route`;
/// the diagram processor executes the element types. Everything else is a
/// no-op for the stage that sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Include,
    Exclude,
    Tag,
    Route,
    Notification,
    Message,
    Note,
    Activate,
    Deactivate,
    Divider,
    Delay,
    Group,
    GroupEnd,
    /// Unrecognized type; never fires an effect.
    #[serde(other)]
    Other,
}

/// Message arrow rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowStyle {
    #[default]
    Solid,
    Dashed,
    Async,
    Dotted,
    Response,
}

/// Placement of a note relative to its participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotePosition {
    #[default]
    Over,
    Left,
    Right,
}

/// One rule action with its type-specific parameters.
///
/// Absent parameters deserialize to their defaults; which parameters are
/// meaningful depends on [`ActionType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    /// Sending participant id (diagram elements).
    #[serde(default)]
    pub from: Option<String>,
    /// Receiving participant id (diagram elements).
    #[serde(default)]
    pub to: Option<String>,
    /// Text template; may contain placeholders on the diagram path.
    #[serde(default)]
    pub text: Option<String>,
    /// Tag value (`tag` actions accept either `value` or `tag` on the wire).
    #[serde(default, alias = "tag")]
    pub value: Option<String>,
    /// Route target processor name (`route` actions).
    #[serde(default)]
    pub processor: Option<String>,
    #[serde(rename = "arrowStyle", default)]
    pub arrow_style: ArrowStyle,
    #[serde(rename = "notePosition", default)]
    pub note_position: NotePosition,
}

impl Action {
    /// Whether this action produces a diagram element.
    pub fn is_diagram_element(&self) -> bool {
        matches!(
            self.action_type,
            ActionType::Message
                | ActionType::Note
                | ActionType::Activate
                | ActionType::Deactivate
                | ActionType::Divider
                | ActionType::Delay
                | ActionType::Group
                | ActionType::GroupEnd
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_type_parses_lowercase_wire_names() {
        let a: Action = serde_json::from_str(r#"{"type": "groupend"}"#).unwrap();
        assert_eq!(a.action_type, ActionType::GroupEnd);
        assert!(a.is_diagram_element());
    }

    #[test]
    fn unknown_action_type_maps_to_other() {
        let a: Action = serde_json::from_str(r#"{"type": "teleport"}"#).unwrap();
        assert_eq!(a.action_type, ActionType::Other);
        assert!(!a.is_diagram_element());
    }

    #[test]
    fn tag_alias_for_value() {
        let a: Action = serde_json::from_str(r#"{"type": "tag", "tag": "security"}"#).unwrap();
        assert_eq!(a.value.as_deref(), Some("security"));
    }

    #[test]
    fn style_defaults() {
        let a: Action = serde_json::from_str(r#"{"type": "message"}"#).unwrap();
        assert_eq!(a.arrow_style, ArrowStyle::Solid);
        assert_eq!(a.note_position, NotePosition::Over);
    }
}
