//! Logger metrics for observability
//!
//! Counters for monitoring logger behavior: how many lines were
//! emitted, how many calls the filters suppressed, and how many sink
//! writes failed silently.

use std::sync::atomic::{AtomicU64, Ordering};

/// Relaxed counters; a reader may observe a line as written slightly
/// before or after a concurrent suppression is counted.
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    lines_written: AtomicU64,
    suppressed: AtomicU64,
    write_errors: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    /// Number of formatted lines fully written (line plus terminator).
    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    /// Number of `log` calls suppressed by level or tag filtering,
    /// including calls naming an unregistered level.
    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    /// Number of `log` calls that failed at the sink.
    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.suppressed(), 0);
        assert_eq!(metrics.write_errors(), 0);
    }

    #[test]
    fn test_recording() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();
        metrics.record_written();
        metrics.record_suppressed();
        metrics.record_write_error();
        assert_eq!(metrics.lines_written(), 2);
        assert_eq!(metrics.suppressed(), 1);
        assert_eq!(metrics.write_errors(), 1);
    }
}
