//! Logger facade
//!
//! Ties the level registry, format registry, filter policy, and sinks
//! together. All configuration is instance-owned and mutable for the
//! logger's lifetime; the registries and filter sets sit behind
//! `parking_lot` locks so a shared `Logger` tolerates concurrent use.
//! The two writes inside one `log` call are not atomic with respect to
//! a concurrent `log` targeting the same sink; serializing whole lines
//! is the sink's concern.

use super::filter::FilterPolicy;
use super::host::{HostInfo, SystemHost};
use super::level::LevelType;
use super::metrics::LoggerMetrics;
use super::template::{self, Fields, FormatRegistry};
use super::timestamp::{DateFormat, DEFAULT_DATE_FORMAT};
use crate::core::error::Result;
use crate::sinks::{LogSink, StderrSink, StdoutSink};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Minimum severity admitted by a new logger (the INFO tier).
pub const DEFAULT_MIN_SEVERITY: i64 = 20;

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// Default level registrations: name, severity, primary-or-secondary
/// destination, color when the destination is interactive.
const DEFAULT_LEVELS: &[(&str, i64, bool, &str)] = &[
    ("DEBUG", 0, true, "cyan"),
    ("INFO", 20, true, "green"),
    ("WARN", 40, false, "yellow"),
    ("ERROR", 60, false, "red"),
    ("FATAL", 80, false, "purple"),
];

struct ActiveConfig {
    template: String,
    date_format: DateFormat,
    end: String,
    color: bool,
    min_severity: i64,
}

pub struct Logger {
    types: RwLock<HashMap<String, LevelType>>,
    formats: RwLock<FormatRegistry>,
    outputs: RwLock<HashMap<String, Arc<dyn LogSink>>>,
    active: RwLock<ActiveConfig>,
    filter: RwLock<FilterPolicy>,
    host: Arc<dyn HostInfo>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// A logger with all defaults: `oneline` format, platform line
    /// ending, color on, minimum severity 20, empty tag sets.
    #[must_use]
    pub fn new() -> Self {
        LoggerOptions::new().build()
    }

    /// Start configuring a logger.
    #[must_use]
    pub fn builder() -> LoggerOptions {
        LoggerOptions::new()
    }

    /// Select the active template: the registered template for `name`,
    /// or `name` itself as a literal one-off template.
    pub fn format(&self, name: &str) {
        let template = self.formats.read().select(name);
        self.active.write().template = template;
    }

    /// Set the active date-format specifier (moment-style tokens).
    pub fn date_format(&self, spec: &str) {
        self.active.write().date_format = DateFormat::new(spec);
    }

    /// Set the line terminator written after each log line.
    pub fn end(&self, literal: &str) {
        self.active.write().end = literal.to_string();
    }

    /// Enable or disable color globally. Levels registered with the
    /// `"no"` color stay uncolored either way.
    pub fn color(&self, flag: bool) {
        self.active.write().color = flag;
    }

    pub fn uncolor(&self) {
        self.color(false);
    }

    /// Set the minimum admitted severity.
    pub fn level(&self, value: i64) {
        self.active.write().min_severity = value;
    }

    /// Register or overwrite a named template.
    pub fn set_format(&self, name: &str, template: &str) {
        self.formats.write().set(name, template);
    }

    /// Register or replace a named output sink. Not consulted by `log`
    /// (levels carry their resolved sink), but available when building
    /// custom level registrations.
    pub fn set_output(&self, name: &str, sink: Arc<dyn LogSink>) {
        self.outputs.write().insert(name.to_string(), sink);
    }

    /// Look up a registered output sink.
    pub fn output(&self, name: &str) -> Option<Arc<dyn LogSink>> {
        self.outputs.read().get(name).cloned()
    }

    /// Register or replace a named level. `None` for the sink selects
    /// the secondary output (`stderr`).
    pub fn set_type(
        &self,
        name: &str,
        severity: i64,
        sink: Option<Arc<dyn LogSink>>,
        color_name: &str,
    ) {
        let sink = sink
            .or_else(|| self.output("stderr"))
            .unwrap_or_else(|| Arc::new(StderrSink::new()));
        self.types
            .write()
            .insert(name.to_string(), LevelType::new(severity, sink, color_name));
    }

    /// Format and write one log line.
    ///
    /// A silent no-op when `type_name` is unregistered, when the level's
    /// severity is below the active minimum, or when `tag` is filtered
    /// out; the suppressed counter is the only side effect. Sink write
    /// failures are swallowed and counted too.
    pub fn log(&self, type_name: &str, message: &str, tag: &str) {
        let Some(level) = self.types.read().get(type_name).cloned() else {
            self.metrics.record_suppressed();
            return;
        };

        let (template, date_format, end, color_enabled, min_severity) = {
            let active = self.active.read();
            (
                active.template.clone(),
                active.date_format.clone(),
                active.end.clone(),
                active.color,
                active.min_severity,
            )
        };

        if level.severity < min_severity || !self.filter.read().admits(tag) {
            self.metrics.record_suppressed();
            return;
        }

        let date = date_format.render(&self.host.now());
        let severity = level.severity.to_string();
        let color = level.color.to_string();
        let pid = self.host.pid().to_string();
        let ppid = self.host.ppid().to_string();

        let fields = Fields {
            type_name,
            level: &severity,
            color: &color,
            date: &date,
            username: self.host.username(),
            hostname: self.host.hostname(),
            pid: &pid,
            ppid: &ppid,
            tag,
            message,
        };

        let mut line = template::render(&template, &fields);
        if !color_enabled || level.color < 0 {
            line = template::strip_ansi(&line);
        }

        if level.sink.write(line.as_bytes()).is_err() || level.sink.write(end.as_bytes()).is_err() {
            self.metrics.record_write_error();
            return;
        }
        self.metrics.record_written();
    }

    #[inline]
    pub fn debug(&self, message: &str, tag: &str) {
        self.log("DEBUG", message, tag);
    }

    #[inline]
    pub fn info(&self, message: &str, tag: &str) {
        self.log("INFO", message, tag);
    }

    #[inline]
    pub fn warn(&self, message: &str, tag: &str) {
        self.log("WARN", message, tag);
    }

    #[inline]
    pub fn error(&self, message: &str, tag: &str) {
        self.log("ERROR", message, tag);
    }

    #[inline]
    pub fn fatal(&self, message: &str, tag: &str) {
        self.log("FATAL", message, tag);
    }

    /// Admit `tag` even under global ignore.
    pub fn on_tag(&self, tag: &str) {
        self.filter.write().enable_tag(tag);
    }

    /// Deny `tag` regardless of level.
    pub fn off_tag(&self, tag: &str) {
        self.filter.write().disable_tag(tag);
    }

    pub fn on_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter.write().enable_tags(tags);
    }

    pub fn off_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter.write().disable_tags(tags);
    }

    /// `accept_all(true)` clears global ignore; `false` enables it.
    pub fn accept_all(&self, flag: bool) {
        self.filter.write().set_accept_all(flag);
    }

    /// Suppress every tag not explicitly accepted.
    pub fn ignore_all(&self) {
        self.filter.write().set_ignore_all();
    }

    /// Observability counters for this logger.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush every registered output sink.
    pub fn flush(&self) -> Result<()> {
        for sink in self.outputs.read().values() {
            sink.flush()?;
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`Logger`].
///
/// # Example
/// ```
/// use tagalog::prelude::*;
///
/// let logger = Logger::builder()
///     .format("short")
///     .level(40)
///     .ignore_tags(["noisy"])
///     .build();
/// logger.warn("disk low", "storage");
/// ```
pub struct LoggerOptions {
    format: Option<String>,
    date_format: Option<String>,
    end: Option<String>,
    color: bool,
    level: i64,
    ignore_all: bool,
    ignore_tags: HashSet<String>,
    accept_tags: HashSet<String>,
    host: Option<Arc<dyn HostInfo>>,
    stdout: Option<Arc<dyn LogSink>>,
    stderr: Option<Arc<dyn LogSink>>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self {
            format: None,
            date_format: None,
            end: None,
            color: true,
            level: DEFAULT_MIN_SEVERITY,
            ignore_all: false,
            ignore_tags: HashSet::new(),
            accept_tags: HashSet::new(),
            host: None,
            stdout: None,
            stderr: None,
        }
    }

    /// Active template name or literal template string.
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, name: impl Into<String>) -> Self {
        self.format = Some(name.into());
        self
    }

    /// Date-format specifier (moment-style tokens).
    #[must_use = "builder methods return a new value"]
    pub fn date_format(mut self, spec: impl Into<String>) -> Self {
        self.date_format = Some(spec.into());
        self
    }

    /// Line terminator; defaults to the platform line ending.
    #[must_use = "builder methods return a new value"]
    pub fn end(mut self, literal: impl Into<String>) -> Self {
        self.end = Some(literal.into());
        self
    }

    /// Global color flag; defaults to true.
    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, flag: bool) -> Self {
        self.color = flag;
        self
    }

    /// Minimum admitted severity; defaults to 20.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, value: i64) -> Self {
        self.level = value;
        self
    }

    /// Initial global-ignore flag; defaults to false.
    #[must_use = "builder methods return a new value"]
    pub fn ignore_all(mut self, flag: bool) -> Self {
        self.ignore_all = flag;
        self
    }

    /// Initial deny set.
    #[must_use = "builder methods return a new value"]
    pub fn ignore_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Initial allow set.
    #[must_use = "builder methods return a new value"]
    pub fn accept_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the process-metadata provider.
    #[must_use = "builder methods return a new value"]
    pub fn host(mut self, host: Arc<dyn HostInfo>) -> Self {
        self.host = Some(host);
        self
    }

    /// Replace the primary stream (registered as `stdout`, used by the
    /// default DEBUG and INFO levels).
    #[must_use = "builder methods return a new value"]
    pub fn stdout(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.stdout = Some(sink);
        self
    }

    /// Replace the secondary stream (registered as `stderr`, used by the
    /// default WARN, ERROR, and FATAL levels).
    #[must_use = "builder methods return a new value"]
    pub fn stderr(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.stderr = Some(sink);
        self
    }

    pub fn build(self) -> Logger {
        let stdout: Arc<dyn LogSink> = self.stdout.unwrap_or_else(|| Arc::new(StdoutSink::new()));
        let stderr: Arc<dyn LogSink> = self.stderr.unwrap_or_else(|| Arc::new(StderrSink::new()));
        let host: Arc<dyn HostInfo> = self.host.unwrap_or_else(|| Arc::new(SystemHost::new()));

        let mut types = HashMap::new();
        for &(name, severity, primary, color) in DEFAULT_LEVELS {
            let sink = if primary { &stdout } else { &stderr };
            let color = if sink.is_terminal() { color } else { "no" };
            types.insert(
                name.to_string(),
                LevelType::new(severity, Arc::clone(sink), color),
            );
        }

        let formats = FormatRegistry::new();
        let template = formats.select(self.format.as_deref().unwrap_or("oneline"));

        let mut outputs: HashMap<String, Arc<dyn LogSink>> = HashMap::new();
        outputs.insert("stdout".to_string(), Arc::clone(&stdout));
        outputs.insert("stderr".to_string(), Arc::clone(&stderr));

        Logger {
            types: RwLock::new(types),
            formats: RwLock::new(formats),
            outputs: RwLock::new(outputs),
            active: RwLock::new(ActiveConfig {
                template,
                date_format: DateFormat::new(
                    self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT),
                ),
                end: self.end.unwrap_or_else(|| EOL.to_string()),
                color: self.color,
                min_severity: self.level,
            }),
            filter: RwLock::new(FilterPolicy::new(
                self.ignore_all,
                self.ignore_tags,
                self.accept_tags,
            )),
            host,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::FixedHost;
    use crate::sinks::MemorySink;
    use chrono::TimeZone;

    fn fixed_host() -> Arc<FixedHost> {
        Arc::new(FixedHost {
            username: "alice".into(),
            hostname: "example".into(),
            pid: 123,
            ppid: 45,
            timestamp: chrono::Local
                .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
                .single()
                .expect("valid datetime"),
        })
    }

    fn capture_logger() -> (Logger, MemorySink, MemorySink) {
        let out = MemorySink::new();
        let err = MemorySink::new();
        let logger = Logger::builder()
            .host(fixed_host())
            .stdout(Arc::new(out.clone()))
            .stderr(Arc::new(err.clone()))
            .end("\n")
            .build();
        (logger, out, err)
    }

    #[test]
    fn test_unknown_level_is_a_noop() {
        let (logger, out, err) = capture_logger();
        logger.log("NOPE", "message", "");
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert_eq!(logger.metrics().suppressed(), 1);
        assert_eq!(logger.metrics().lines_written(), 0);
    }

    #[test]
    fn test_default_threshold_admits_info() {
        let (logger, out, _err) = capture_logger();
        logger.debug("hidden", "");
        logger.info("shown", "");
        let contents = out.contents();
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("shown"));
    }

    #[test]
    fn test_default_levels_route_to_streams() {
        let (logger, out, err) = capture_logger();
        logger.info("to out", "");
        logger.error("to err", "");
        assert!(out.contents().contains("to out"));
        assert!(err.contents().contains("to err"));
        assert!(!err.contents().contains("to out"));
    }

    #[test]
    fn test_format_selects_literal_for_unknown_name() {
        let (logger, out, _err) = capture_logger();
        logger.format("<{type}> {message}");
        logger.info("inline", "");
        assert_eq!(out.contents(), "<INFO> inline\n");
    }

    #[test]
    fn test_set_type_replaces_registration() {
        let (logger, out, err) = capture_logger();
        let sink = logger.output("stdout").expect("stdout registered");
        logger.set_type("ERROR", 60, Some(sink), "no");
        logger.format("{message}");
        logger.error("rerouted", "");
        assert!(out.contents().contains("rerouted"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_set_type_defaults_to_secondary_output() {
        let (logger, _out, err) = capture_logger();
        logger.format("{type}:{message}");
        logger.set_type("AUDIT", 90, None, "no");
        logger.log("AUDIT", "checked", "");
        assert_eq!(err.contents(), "AUDIT:checked\n");
    }

    #[test]
    fn test_level_setter_raises_threshold() {
        let (logger, out, err) = capture_logger();
        logger.level(80);
        logger.info("no", "");
        logger.error("no", "");
        logger.fatal("yes", "");
        assert!(out.is_empty());
        assert!(!err.contents().contains("no"));
        assert!(err.contents().contains("yes"));
        assert_eq!(logger.metrics().suppressed(), 2);
        assert_eq!(logger.metrics().lines_written(), 1);
    }

    #[test]
    fn test_end_setter_changes_terminator() {
        let (logger, out, _err) = capture_logger();
        logger.format("{message}");
        logger.end(";");
        logger.info("a", "");
        logger.info("b", "");
        assert_eq!(out.contents(), "a;b;");
    }

    #[test]
    fn test_builder_initial_tag_sets() {
        let (out, err) = (MemorySink::new(), MemorySink::new());
        let logger = Logger::builder()
            .host(fixed_host())
            .stdout(Arc::new(out.clone()))
            .stderr(Arc::new(err.clone()))
            .format("{message}")
            .end("\n")
            .ignore_all(true)
            .accept_tags(["keep"])
            .build();
        logger.info("one", "keep");
        logger.info("two", "other");
        assert_eq!(out.contents(), "one\n");
    }

    #[test]
    fn test_memory_sinks_disable_default_colors() {
        // MemorySink is never a terminal, so default levels register "no"
        let (logger, out, _err) = capture_logger();
        logger.info("plain", "");
        assert!(!out.contents().contains('\x1b'));
    }

    #[test]
    fn test_flush_succeeds() {
        let (logger, _out, _err) = capture_logger();
        logger.flush().expect("memory sinks flush");
    }
}
