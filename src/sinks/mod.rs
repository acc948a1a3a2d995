//! Destination sinks
//!
//! A sink is an externally owned byte destination. The logger writes to
//! sinks but never closes them, and a sink outlives any level that
//! references it only by virtue of shared ownership.

pub mod console;
pub mod memory;

pub use console::{StderrSink, StdoutSink};
pub use memory::MemorySink;

use crate::core::error::Result;

/// Byte sink the logger writes rendered lines to.
///
/// `write` is called twice per emitted log line (line, then
/// terminator); the two calls are not atomic with respect to concurrent
/// writers targeting the same sink. A sink that needs whole-line
/// atomicity must serialize internally.
pub trait LogSink: Send + Sync {
    fn write(&self, bytes: &[u8]) -> Result<()>;

    fn flush(&self) -> Result<()>;

    /// Whether the destination is an interactive terminal. Drives the
    /// color choice for the default level registrations.
    fn is_terminal(&self) -> bool {
        false
    }

    fn name(&self) -> &str;
}
