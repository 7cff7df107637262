//! Lane backed by a closure

use std::fmt;

use super::LoggingLane;
use crate::record::LogRecord;

/// Adapts any `Fn(&LogRecord)` into a lane
pub struct FnLane<F> {
    name: String,
    handler: F,
}

impl<F> FnLane<F>
where
    F: Fn(&LogRecord) + Send + Sync,
{
    /// Create a named closure lane
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

impl<F> LoggingLane for FnLane<F>
where
    F: Fn(&LogRecord) + Send + Sync,
{
    fn deliver(&self, record: &LogRecord) {
        (self.handler)(record)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnLane<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLane").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_site::CallSite;
    use crate::severity::Severity;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_fn_lane_forwards_records() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let lane = FnLane::new("collector", move |record: &LogRecord| {
            sink.lock().unwrap().push(record.message.clone());
        });

        lane.deliver(&LogRecord::new(
            "hello",
            Severity::Debug,
            CallSite::new("f", "g", 3),
            None,
        ));

        assert_eq!(lane.name(), "collector");
        assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
    }
}
