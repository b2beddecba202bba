//! Structured logging for Shopfront components and services.
//!
//! - `StructuredLogger` - leveled logs with component/route context and
//!   builder-style fields, emitted as `tracing` events
//! - `LogCapture` - in-memory sink for asserting on logs in tests

mod logging;

pub use logging::*;
