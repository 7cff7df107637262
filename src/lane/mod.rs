//! Lane abstraction and bundled lanes
//!
//! A lane is a destination that receives every record the controller fans out.
//! Lanes decide on their own how (or whether) to format, store, or ship a record.

mod closure;
mod memory;
mod tracing_lane;

pub use closure::FnLane;
pub use memory::{MemoryLane, DEFAULT_ALERT_CAPACITY, DEFAULT_CAPACITY};
pub use tracing_lane::{TracingLane, RECORD_TARGET};

use crate::record::LogRecord;

/// Trait for logging lanes
///
/// Implementations receive each record by reference and must not report failures back;
/// anything that goes wrong inside a lane stays inside it. The controller still guards
/// against panics, so one misbehaving lane cannot stop delivery to the others.
///
/// That guard only stops the unwind. The process panic hook still runs first, and the
/// default hook prints the panic message (and a backtrace if enabled) to stderr. A lane
/// that must fail silently handles its own errors instead of panicking.
///
/// `deliver` runs while the controller's registry lock is held. Calling back into the
/// same controller from `deliver` deadlocks.
///
/// # Object Safety
/// This trait is object-safe to allow `Arc<dyn LoggingLane>` usage.
pub trait LoggingLane: Send + Sync {
    /// Receive one record
    fn deliver(&self, record: &LogRecord);

    /// Name used in the controller's own diagnostics
    fn name(&self) -> &str {
        "lane"
    }
}
