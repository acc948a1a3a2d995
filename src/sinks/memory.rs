//! In-memory capture sink

use super::LogSink;
use crate::core::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Sink that records every write in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// the logger another. Each `write` call is recorded separately, which
/// lets callers assert that the line and its terminator arrived as two
/// distinct writes. Always reports itself non-interactive.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write so far, in order, one entry per `write` call.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.lock().clone()
    }

    /// All captured bytes concatenated and decoded lossily.
    pub fn contents(&self) -> String {
        let writes = self.writes.lock();
        let bytes: Vec<u8> = writes.iter().flatten().copied().collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.writes.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        self.writes.lock().push(bytes.to_vec());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
