//! Call-site metadata attached to every log record

use serde::{Deserialize, Serialize};

/// Origin of a log statement
///
/// Values are taken verbatim from the caller; nothing is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSite {
    /// Source file identifier
    pub file: String,
    /// Function identifier
    pub function: String,
    /// Line number within `file`
    pub line: u32,
}

impl CallSite {
    /// Create a new call site
    pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            function: function.into(),
            line,
        }
    }
}

impl std::fmt::Display for CallSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.file, self.line, self.function)
    }
}
