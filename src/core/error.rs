//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors raised by sink implementations.
///
/// Public `Logger` operations never surface these: a failed write inside
/// `log` is swallowed and counted in [`LoggerMetrics`](super::metrics::LoggerMetrics).
/// The type exists so custom [`LogSink`](crate::sinks::LogSink)
/// implementations can report failures through a uniform channel.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from an underlying stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink-specific failure
    #[error("sink '{name}' error: {message}")]
    Sink { name: String, message: String },
}

impl LoggerError {
    /// Create a sink error
    pub fn sink(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Sink {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_error_display() {
        let err = LoggerError::sink("stdout", "stream closed");
        assert_eq!(err.to_string(), "sink 'stdout' error: stream closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
