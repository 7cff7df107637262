//! The record handed to every lane

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::call_site::CallSite;
use crate::severity::Severity;

/// A single log record
///
/// Built once per log call and shared read-only with every lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Timestamp when the record was built
    pub timestamp: DateTime<Utc>,
    /// Severity of the message
    pub severity: Severity,
    /// Where the message was logged from
    pub call_site: CallSite,
    /// Tag registered on the controller at the time of the call
    pub tag: Option<String>,
    /// Log message
    pub message: String,
}

impl LogRecord {
    /// Create a new record stamped with the current time
    pub fn new(
        message: impl Into<String>,
        severity: Severity,
        call_site: CallSite,
        tag: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            call_site,
            tag,
            message: message.into(),
        }
    }

    /// Tag as a string slice, if one is set
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}
