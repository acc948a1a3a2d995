//! Core logger types

pub mod color;
pub mod error;
pub mod filter;
pub mod host;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod template;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use filter::FilterPolicy;
pub use host::{FixedHost, HostInfo, SystemHost};
pub use level::LevelType;
pub use logger::{Logger, LoggerOptions, DEFAULT_MIN_SEVERITY};
pub use metrics::LoggerMetrics;
pub use template::FormatRegistry;
pub use timestamp::{DateFormat, DEFAULT_DATE_FORMAT};
