//! # tagalog
//!
//! A configurable template-driven text logger with per-tag and
//! per-level filtering.
//!
//! ## Features
//!
//! - **Templates**: log lines are rendered from placeholder templates
//!   (`{type}`, `{date}`, `{tag}`, `{message}`, ...) with built-in
//!   `oneline`, `short`, and `json` formats
//! - **Filtering**: a minimum severity threshold plus tag allow/deny
//!   sets, switchable at runtime
//! - **Color**: ANSI color codes resolved per level, stripped when
//!   color is off or the destination is not a terminal
//! - **Permissive**: unknown levels and malformed template references
//!   degrade to no-ops or literal output, never errors
//!
//! ## Example
//!
//! ```
//! use tagalog::prelude::*;
//!
//! let logger = Logger::new();
//! logger.info("server started", "boot");
//! logger.off_tag("boot");
//! logger.info("suppressed now", "boot");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        DateFormat, FilterPolicy, FixedHost, FormatRegistry, HostInfo, LevelType, Logger,
        LoggerError, LoggerMetrics, LoggerOptions, Result, SystemHost, DEFAULT_DATE_FORMAT,
        DEFAULT_MIN_SEVERITY,
    };
    pub use crate::sinks::{LogSink, MemorySink, StderrSink, StdoutSink};
}

pub use core::{
    DateFormat, FilterPolicy, FixedHost, FormatRegistry, HostInfo, LevelType, Logger, LoggerError,
    LoggerMetrics, LoggerOptions, Result, SystemHost, DEFAULT_DATE_FORMAT, DEFAULT_MIN_SEVERITY,
};
pub use sinks::{LogSink, MemorySink, StderrSink, StdoutSink};
