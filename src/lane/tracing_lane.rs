//! Lane that re-emits records as `tracing` events
//!
//! Formatting and output are left to whatever subscriber the application installs.

use super::LoggingLane;
use crate::record::LogRecord;
use crate::severity::Severity;

/// Target for forwarded records
///
/// Kept apart from the crate's own module paths so a filter can admit every record level
/// without also enabling `nanolog::*` diagnostics.
pub const RECORD_TARGET: &str = "nanolog_record";

/// Forwards every record into the `tracing` ecosystem under [`RECORD_TARGET`]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLane;

impl TracingLane {
    pub fn new() -> Self {
        Self
    }
}

// `tag` is an Option so an absent tag records no field at all
macro_rules! emit {
    ($macro:ident, $record:expr) => {
        tracing::$macro!(
            target: "nanolog_record",
            tag = $record.tag(),
            file = %$record.call_site.file,
            function = %$record.call_site.function,
            line = $record.call_site.line,
            "{}",
            $record.message
        )
    };
}

impl LoggingLane for TracingLane {
    fn deliver(&self, record: &LogRecord) {
        // tracing levels must be known at the macro call site
        match record.severity {
            Severity::Verbose => emit!(trace, record),
            Severity::Debug => emit!(debug, record),
            Severity::Info => emit!(info, record),
            Severity::Warning => emit!(warn, record),
            Severity::Error => emit!(error, record),
        }
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
