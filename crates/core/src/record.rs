//! Read-only log record accessor surface.
//!
//! Rule evaluation only ever reads records through [`SearchResult`], so any
//! provider-specific record shape (event log, trace file, syslog line) can
//! feed the pipeline by implementing the trait. [`LogRecord`] is the owned
//! materialization used by callers that build records up front and by tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accessor surface over a single log record.
///
/// All accessors are read-only; evaluation never mutates a record. String
/// accessors return `&str` into the record's own storage.
pub trait SearchResult {
    /// Severity level, e.g. "Error", "Warning", "Information".
    fn level(&self) -> &str;
    /// Provider/source name that emitted the record.
    fn source(&self) -> &str;
    /// Machine the record was captured on.
    fn machine_name(&self) -> &str;
    /// User associated with the record, if any.
    fn username(&self) -> &str;
    /// Task name, if the provider supplies one.
    fn task_name(&self) -> &str;
    /// Operation code, if the provider supplies one.
    fn op_code(&self) -> &str;
    /// Timestamp of the record.
    fn log_time(&self) -> DateTime<Utc>;
    /// Human-readable message body.
    fn message(&self) -> &str;
    /// Full searchable raw text (the default field for rule matching).
    fn searchable_data(&self) -> &str;
}

/// Owned log record.
///
/// `searchable_data` is expected to be fully materialized before evaluation
/// begins; the pipeline never re-parses or back-fills it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogRecord {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub machine_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub op_code: String,
    pub log_time: DateTime<Utc>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub searchable_data: String,
}

impl LogRecord {
    /// Build a minimal record from message text, using the message as the
    /// searchable data too.
    pub fn from_message(log_time: DateTime<Utc>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            level: String::new(),
            source: String::new(),
            machine_name: String::new(),
            username: String::new(),
            task_name: String::new(),
            op_code: String::new(),
            log_time,
            searchable_data: message.clone(),
            message,
        }
    }
}

impl SearchResult for LogRecord {
    fn level(&self) -> &str {
        &self.level
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn machine_name(&self) -> &str {
        &self.machine_name
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn task_name(&self) -> &str {
        &self.task_name
    }

    fn op_code(&self) -> &str {
        &self.op_code
    }

    fn log_time(&self) -> DateTime<Utc> {
        self.log_time
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn searchable_data(&self) -> &str {
        &self.searchable_data
    }
}
