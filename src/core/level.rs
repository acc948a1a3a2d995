//! Level registration records

use super::color;
use crate::sinks::LogSink;
use std::fmt;
use std::sync::Arc;

/// Immutable registration record for a named log level.
///
/// Created when a level is registered (at `Logger` construction or via
/// `set_type`) and never mutated afterwards; re-registering a name
/// replaces the record wholesale.
#[derive(Clone)]
pub struct LevelType {
    /// Threshold-ordering severity; higher is more severe.
    pub severity: i64,
    /// Destination the level writes to. Shared, never closed by the logger.
    pub sink: Arc<dyn LogSink>,
    /// Resolved color code, [`color::NO_COLOR`] when color is disabled
    /// for this level.
    pub color: i8,
}

impl LevelType {
    /// Build a record, resolving `color_name` through the color table.
    pub fn new(severity: i64, sink: Arc<dyn LogSink>, color_name: &str) -> Self {
        Self {
            severity,
            sink,
            color: color::resolve(color_name),
        }
    }
}

impl fmt::Debug for LevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelType")
            .field("severity", &self.severity)
            .field("sink", &self.sink.name())
            .field("color", &self.color)
            .finish()
    }
}
