//! Logging macros for ergonomic message formatting.
//!
//! These macros wrap the level methods with `format!`-style argument
//! handling and an optional `tag:` prefix.
//!
//! # Examples
//!
//! ```
//! use tagalog::prelude::*;
//! use tagalog::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//!
//! // With a tag
//! info!(logger, tag: "net", "connection from {}", "10.0.0.2");
//! ```

/// Log a message under a named level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use tagalog::prelude::*;
/// # let logger = Logger::new();
/// use tagalog::log;
/// log!(logger, "INFO", "simple message");
/// log!(logger, "ERROR", tag: "http", "status: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $type:expr, tag: $tag:expr, $($arg:tt)+) => {
        $logger.log($type, &format!($($arg)+), $tag)
    };
    ($logger:expr, $type:expr, $($arg:tt)+) => {
        $logger.log($type, &format!($($arg)+), "")
    };
}

/// Log a debug-level message.
///
/// ```
/// # use tagalog::prelude::*;
/// # let logger = Logger::builder().level(0).build();
/// use tagalog::debug;
/// debug!(logger, "counter value: {}", 42);
/// debug!(logger, tag: "cache", "miss for {}", "key1");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, "DEBUG", tag: $tag, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "DEBUG", $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use tagalog::prelude::*;
/// # let logger = Logger::new();
/// use tagalog::info;
/// info!(logger, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, "INFO", tag: $tag, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "INFO", $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use tagalog::prelude::*;
/// # let logger = Logger::new();
/// use tagalog::warn;
/// warn!(logger, "retry {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, "WARN", tag: $tag, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "WARN", $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use tagalog::prelude::*;
/// # let logger = Logger::new();
/// use tagalog::error;
/// error!(logger, tag: "db", "connection lost: {}", "timeout");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, "ERROR", tag: $tag, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "ERROR", $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// ```
/// # use tagalog::prelude::*;
/// # let logger = Logger::new();
/// use tagalog::fatal;
/// fatal!(logger, "unrecoverable: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, "FATAL", tag: $tag, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "FATAL", $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{FixedHost, Logger};
    use crate::sinks::MemorySink;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn capture_logger() -> (Logger, MemorySink, MemorySink) {
        let out = MemorySink::new();
        let err = MemorySink::new();
        let logger = Logger::builder()
            .host(Arc::new(FixedHost {
                username: "alice".into(),
                hostname: "example".into(),
                pid: 123,
                ppid: 45,
                timestamp: chrono::Local
                    .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
                    .single()
                    .expect("valid datetime"),
            }))
            .stdout(Arc::new(out.clone()))
            .stderr(Arc::new(err.clone()))
            .format("{type}|{tag}|{message}")
            .end("\n")
            .level(0)
            .build();
        (logger, out, err)
    }

    #[test]
    fn test_log_macro() {
        let (logger, out, _err) = capture_logger();
        log!(logger, "INFO", "formatted: {}", 42);
        assert_eq!(out.contents(), "INFO||formatted: 42\n");
    }

    #[test]
    fn test_log_macro_with_tag() {
        let (logger, out, _err) = capture_logger();
        log!(logger, "INFO", tag: "sys", "up");
        assert_eq!(out.contents(), "INFO|sys|up\n");
    }

    #[test]
    fn test_level_macros() {
        let (logger, out, err) = capture_logger();
        debug!(logger, "d {}", 1);
        info!(logger, "i");
        warn!(logger, "w");
        error!(logger, tag: "db", "e");
        fatal!(logger, "f");
        assert_eq!(out.contents(), "DEBUG||d 1\nINFO||i\n");
        assert_eq!(err.contents(), "WARN||w\nERROR|db|e\nFATAL||f\n");
    }
}
