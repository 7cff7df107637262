//! In-memory lane for inspecting recent records
//!
//! Keeps a bounded ring buffer of records plus a smaller buffer of warnings and errors.

use std::collections::VecDeque;
use std::sync::RwLock;

use super::LoggingLane;
use crate::record::LogRecord;

/// Default number of records kept
pub const DEFAULT_CAPACITY: usize = 1000;

/// Default number of alerts kept
pub const DEFAULT_ALERT_CAPACITY: usize = 100;

/// Thread-safe ring buffer lane
#[derive(Debug)]
pub struct MemoryLane {
    /// All records (capped at max_records)
    records: RwLock<VecDeque<LogRecord>>,
    /// Warnings and errors only
    alerts: RwLock<VecDeque<LogRecord>>,
    max_records: usize,
    max_alerts: usize,
}

impl MemoryLane {
    /// Create a new lane with the given capacities
    ///
    /// Capacities below one are raised to one.
    pub fn new(max_records: usize, max_alerts: usize) -> Self {
        let max_records = max_records.max(1);
        let max_alerts = max_alerts.max(1);
        Self {
            records: RwLock::new(VecDeque::with_capacity(max_records)),
            alerts: RwLock::new(VecDeque::with_capacity(max_alerts)),
            max_records,
            max_alerts,
        }
    }

    /// Push a record into the buffers, dropping the oldest when full
    fn push(&self, record: &LogRecord) {
        if record.severity.is_alert() {
            if let Ok(mut alerts) = self.alerts.write() {
                if alerts.len() >= self.max_alerts {
                    alerts.pop_front();
                }
                alerts.push_back(record.clone());
            }
        }

        if let Ok(mut records) = self.records.write() {
            if records.len() >= self.max_records {
                records.pop_front();
            }
            records.push_back(record.clone());
        }
    }

    /// Get all buffered records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .read()
            .map(|r| r.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get the most recent record
    pub fn last(&self) -> Option<LogRecord> {
        self.records.read().ok().and_then(|r| r.back().cloned())
    }

    /// Get the number of buffered records
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get buffered warnings and errors
    pub fn alerts(&self) -> Vec<LogRecord> {
        self.alerts
            .read()
            .map(|a| a.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get the number of buffered alerts
    pub fn alert_count(&self) -> usize {
        self.alerts.read().map(|a| a.len()).unwrap_or(0)
    }

    /// Drop all buffered records and alerts
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.write() {
            records.clear();
        }
        self.clear_alerts();
    }

    /// Drop buffered alerts only
    pub fn clear_alerts(&self) {
        if let Ok(mut alerts) = self.alerts.write() {
            alerts.clear();
        }
    }
}

impl Default for MemoryLane {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_ALERT_CAPACITY)
    }
}

impl LoggingLane for MemoryLane {
    fn deliver(&self, record: &LogRecord) {
        self.push(record);
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_site::CallSite;
    use crate::severity::Severity;

    fn record(severity: Severity, message: &str) -> LogRecord {
        LogRecord::new(message, severity, CallSite::new("test", "test", 1), None)
    }

    #[test]
    fn test_memory_lane_deliver_and_retrieve() {
        let lane = MemoryLane::new(100, 10);

        lane.deliver(&record(Severity::Info, "message 1"));
        lane.deliver(&record(Severity::Warning, "warning 1"));
        lane.deliver(&record(Severity::Error, "error 1"));

        assert_eq!(lane.len(), 3);
        assert_eq!(lane.alert_count(), 2);

        let records = lane.records();
        assert_eq!(records[0].message, "message 1");
        assert_eq!(records[1].message, "warning 1");
        assert_eq!(records[2].message, "error 1");

        let alerts = lane.alerts();
        assert_eq!(alerts[0].message, "warning 1");
        assert_eq!(alerts[1].message, "error 1");
        assert_eq!(lane.last().unwrap().message, "error 1");
    }

    #[test]
    fn test_memory_lane_capacity() {
        let lane = MemoryLane::new(3, 2);

        for i in 0..5 {
            lane.deliver(&record(Severity::Error, &format!("msg {}", i)));
        }

        assert_eq!(lane.len(), 3);
        let records = lane.records();
        assert_eq!(records[0].message, "msg 2");
        assert_eq!(records[2].message, "msg 4");

        let alerts = lane.alerts();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].message, "msg 3");
    }

    #[test]
    fn test_memory_lane_zero_capacity_keeps_one() {
        let lane = MemoryLane::new(0, 0);
        lane.deliver(&record(Severity::Warning, "a"));
        lane.deliver(&record(Severity::Warning, "b"));
        assert_eq!(lane.len(), 1);
        assert_eq!(lane.alert_count(), 1);
        assert_eq!(lane.last().unwrap().message, "b");
    }

    #[test]
    fn test_memory_lane_clear() {
        let lane = MemoryLane::default();
        lane.deliver(&record(Severity::Error, "boom"));

        lane.clear_alerts();
        assert_eq!(lane.alert_count(), 0);
        assert_eq!(lane.len(), 1);

        lane.clear();
        assert!(lane.is_empty());
        assert!(lane.last().is_none());
    }
}
