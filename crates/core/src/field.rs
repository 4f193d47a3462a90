//! Symbolic field names and accessor dispatch.
//!
//! Rules reference record fields by name (`"level"`, `"source"`, ...).
//! [`Field::parse`] maps the symbol to a variant; [`Field::extract`] reads
//! the value off a record. `logTime` renders as an RFC 3339 string so that
//! date-shaped patterns can match against it.

use std::borrow::Cow;

use crate::record::SearchResult;

/// Symbolic record field referenced by a rule's `field` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Level,
    Source,
    MachineName,
    Username,
    TaskName,
    OpCode,
    LogTime,
    Message,
    SearchableData,
}

impl Field {
    /// Parse a symbolic field name, case-insensitively.
    ///
    /// Returns `None` for unknown symbols; callers fall back to
    /// [`Field::SearchableData`].
    pub fn parse(symbol: &str) -> Option<Field> {
        match symbol.to_ascii_lowercase().as_str() {
            "level" => Some(Field::Level),
            "source" => Some(Field::Source),
            "machinename" => Some(Field::MachineName),
            "username" => Some(Field::Username),
            "taskname" => Some(Field::TaskName),
            "opcode" => Some(Field::OpCode),
            "logtime" => Some(Field::LogTime),
            "message" => Some(Field::Message),
            "searchabledata" => Some(Field::SearchableData),
            _ => None,
        }
    }

    /// Extract this field's value from a record.
    pub fn extract<'a, R: SearchResult + ?Sized>(&self, record: &'a R) -> Cow<'a, str> {
        match self {
            Field::Level => Cow::Borrowed(record.level()),
            Field::Source => Cow::Borrowed(record.source()),
            Field::MachineName => Cow::Borrowed(record.machine_name()),
            Field::Username => Cow::Borrowed(record.username()),
            Field::TaskName => Cow::Borrowed(record.task_name()),
            Field::OpCode => Cow::Borrowed(record.op_code()),
            Field::LogTime => Cow::Owned(record.log_time().to_rfc3339()),
            Field::Message => Cow::Borrowed(record.message()),
            Field::SearchableData => Cow::Borrowed(record.searchable_data()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LogRecord;
    use chrono::{TimeZone, Utc};

    fn sample_record() -> LogRecord {
        LogRecord {
            level: "Error".to_string(),
            source: "Kernel".to_string(),
            machine_name: "HOST01".to_string(),
            username: "svc_app".to_string(),
            task_name: "Logon".to_string(),
            op_code: "Start".to_string(),
            log_time: Utc.with_ymd_and_hms(2025, 6, 14, 8, 30, 0).unwrap(),
            message: "Session started".to_string(),
            searchable_data: "Error Kernel Session started".to_string(),
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Field::parse("Level"), Some(Field::Level));
        assert_eq!(Field::parse("MACHINENAME"), Some(Field::MachineName));
        assert_eq!(Field::parse("logTime"), Some(Field::LogTime));
        assert_eq!(Field::parse("no_such_field"), None);
    }

    #[test]
    fn extract_dispatches_to_accessors() {
        let rec = sample_record();
        assert_eq!(Field::Level.extract(&rec), "Error");
        assert_eq!(Field::Source.extract(&rec), "Kernel");
        assert_eq!(Field::Username.extract(&rec), "svc_app");
        assert_eq!(Field::Message.extract(&rec), "Session started");
        assert_eq!(
            Field::SearchableData.extract(&rec),
            "Error Kernel Session started"
        );
    }

    #[test]
    fn log_time_renders_rfc3339() {
        let rec = sample_record();
        let value = Field::LogTime.extract(&rec);
        assert_eq!(value, "2025-06-14T08:30:00+00:00");
    }
}
