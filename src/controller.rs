//! Log controller: tag state, lane registry and fan-out
//!
//! The controller is an ordinary value owned by application startup code and shared
//! with `Arc`. Every log call builds one record and hands the same record to each
//! registered lane in registration order, synchronously, on the calling thread.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::call_site::CallSite;
use crate::lane::LoggingLane;
use crate::record::LogRecord;
use crate::severity::Severity;

/// Mutable controller state, guarded by a single lock
#[derive(Default)]
struct ControllerState {
    tag: Option<String>,
    lanes: Vec<Arc<dyn LoggingLane>>,
}

/// Central coordination point for tagging and delivering log records
///
/// One mutex covers both the tag and the lane list, and it stays held for the whole
/// fan-out, so registry changes never interleave with an in-flight delivery.
#[derive(Default)]
pub struct LogController {
    state: Mutex<ControllerState>,
}

impl LogController {
    /// Create a controller with no tag and no lanes
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        // Lane panics are caught inside the fan-out, so the state is never half-updated
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current tag
    ///
    /// Any string is accepted, including the empty string. Records already delivered
    /// are unaffected.
    pub fn register(&self, tag: impl Into<String>) {
        self.lock().tag = Some(tag.into());
    }

    /// Get the current tag
    pub fn tag(&self) -> Option<String> {
        self.lock().tag.clone()
    }

    /// Append a lane to the registry
    ///
    /// The same lane may be added more than once; it then receives one delivery per
    /// registration.
    pub fn add_logging_lane(&self, lane: Arc<dyn LoggingLane>) {
        let mut state = self.lock();
        tracing::debug!(lane = lane.name(), position = state.lanes.len(), "Adding logging lane");
        state.lanes.push(lane);
    }

    /// Remove every registered lane
    pub fn remove_all_logging_lanes(&self) {
        let mut state = self.lock();
        if !state.lanes.is_empty() {
            tracing::debug!(count = state.lanes.len(), "Removing all logging lanes");
        }
        state.lanes.clear();
    }

    /// Get the number of registered lanes
    pub fn lane_count(&self) -> usize {
        self.lock().lanes.len()
    }

    /// Check if no lanes are registered
    pub fn is_empty(&self) -> bool {
        self.lane_count() == 0
    }

    pub fn log_verbose(&self, message: impl Into<String>, file: &str, function: &str, line: u32) {
        self.log_message(message, Severity::Verbose, file, function, line);
    }

    pub fn log_debug(&self, message: impl Into<String>, file: &str, function: &str, line: u32) {
        self.log_message(message, Severity::Debug, file, function, line);
    }

    pub fn log_info(&self, message: impl Into<String>, file: &str, function: &str, line: u32) {
        self.log_message(message, Severity::Info, file, function, line);
    }

    pub fn log_warning(&self, message: impl Into<String>, file: &str, function: &str, line: u32) {
        self.log_message(message, Severity::Warning, file, function, line);
    }

    pub fn log_error(&self, message: impl Into<String>, file: &str, function: &str, line: u32) {
        self.log_message(message, Severity::Error, file, function, line);
    }

    /// Build a record and deliver it to every registered lane
    ///
    /// Inputs are passed through unchanged. With no lanes registered this only builds
    /// the record. A lane that panics is reported through `tracing` and skipped; the
    /// remaining lanes still receive the record.
    pub fn log_message(
        &self,
        message: impl Into<String>,
        severity: Severity,
        file: &str,
        function: &str,
        line: u32,
    ) {
        let call_site = CallSite::new(file, function, line);
        let state = self.lock();
        let record = LogRecord::new(message, severity, call_site, state.tag.clone());

        for lane in &state.lanes {
            let delivered = panic::catch_unwind(AssertUnwindSafe(|| lane.deliver(&record)));
            if delivered.is_err() {
                tracing::warn!(
                    lane = lane.name(),
                    severity = %record.severity,
                    "Logging lane panicked during delivery"
                );
            }
        }
    }
}

impl std::fmt::Debug for LogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        let lanes: Vec<&str> = state.lanes.iter().map(|l| l.name()).collect();
        f.debug_struct("LogController")
            .field("tag", &state.tag)
            .field("lanes", &lanes)
            .finish()
    }
}
