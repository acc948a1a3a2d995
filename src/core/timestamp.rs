//! Date-format specifier handling
//!
//! The active date format uses moment.js-style tokens (`YYYY`, `MM`,
//! `DD`, `HH`, `mm`, `ss`, ...). The specifier is translated to a
//! chrono/strftime string once, when set, so `log` pays only the
//! formatting cost per call.

use chrono::{DateTime, Local};

/// Default date-format specifier for a new logger.
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// Supported tokens, longest-first within each shared prefix so the
/// translation pass can use greedy matching.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("SSS", "%3f"),
    ("A", "%p"),
    ("ZZ", "%z"),
];

/// An active date-format specifier, held in its translated strftime form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    strftime: String,
}

impl DateFormat {
    pub fn new(spec: &str) -> Self {
        Self {
            strftime: translate(spec),
        }
    }

    /// Render a timestamp according to this format.
    pub fn render(&self, at: &DateTime<Local>) -> String {
        at.format(&self.strftime).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

/// Translate a moment-style specifier to strftime. Characters outside
/// the token vocabulary pass through literally; `%` is escaped so it
/// cannot smuggle a conversion into chrono.
fn translate(spec: &str) -> String {
    let mut out = String::with_capacity(spec.len() + 8);
    let mut rest = spec;
    'outer: while !rest.is_empty() {
        for (token, replacement) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            if ch == '%' {
                out.push_str("%%");
            } else {
                out.push(ch);
            }
            rest = chars.as_str();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_default_format() {
        let format = DateFormat::default();
        assert_eq!(format, DateFormat::new(DEFAULT_DATE_FORMAT));
        assert_eq!(format.render(&fixed_datetime()), "2025-01-08 10:30:45");
    }

    #[test]
    fn test_translation() {
        assert_eq!(translate("YYYY-MM-DD HH:mm:ss"), "%Y-%m-%d %H:%M:%S");
        assert_eq!(translate("YY/MM/DD"), "%y/%m/%d");
        assert_eq!(translate("hh:mm A"), "%I:%M %p");
    }

    #[test]
    fn test_literal_passthrough() {
        let format = DateFormat::new("on DD.MM.");
        // 'o' and 'n' are not tokens and survive as literals
        assert_eq!(format.render(&fixed_datetime()), "on 08.01.");
    }

    #[test]
    fn test_percent_is_escaped() {
        let format = DateFormat::new("100%% YYYY");
        // a raw '%' in the spec must not become a strftime conversion
        assert_eq!(format.render(&fixed_datetime()), "100%% 2025");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(DateFormat::new("MMM").render(&fixed_datetime()), "Jan");
        assert_eq!(DateFormat::new("MMMM").render(&fixed_datetime()), "January");
        assert_eq!(DateFormat::new("ddd").render(&fixed_datetime()), "Wed");
    }
}
