//! NanoLog - a small logging facade that fans records out to registered lanes
//!
//! Callers log through a [`LogController`], supplying the message, severity and call
//! site. The controller attaches its current tag and delivers the record to every
//! registered [`LoggingLane`] in registration order.

pub mod call_site;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod lane;
pub mod record;
pub mod severity;

pub use call_site::CallSite;
pub use controller::LogController;
pub use error::{NanoLogError, Result};
pub use lane::{FnLane, LoggingLane, MemoryLane, TracingLane};
pub use record::LogRecord;
pub use severity::Severity;
