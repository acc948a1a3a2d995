//! Standard stream sinks

use super::LogSink;
use crate::core::error::Result;
use std::io::{IsTerminal, Write};

/// Sink writing to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for StdoutSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(bytes)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().lock().flush()?;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Sink writing to the process's standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for StderrSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        let mut err = std::io::stderr().lock();
        err.write_all(bytes)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stderr().lock().flush()?;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        std::io::stderr().is_terminal()
    }

    fn name(&self) -> &str {
        "stderr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(StdoutSink::new().name(), "stdout");
        assert_eq!(StderrSink::new().name(), "stderr");
    }
}
