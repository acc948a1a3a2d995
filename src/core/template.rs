//! Format registry and template substitution
//!
//! Templates are plain strings containing placeholder tokens (`{type}`,
//! `{date}`, `{message}`, ...). Rendering is a single pass over the
//! template: each recognized token is substituted from a field-lookup
//! table, and a substituted value is never re-scanned, so a message that
//! happens to contain `{date}` stays literal in the output.

use serde::Serialize;
use std::collections::HashMap;

/// Built-in `oneline` template: bold color-coded level name, date in
/// brackets, parenthesized `username@hostname pid:ppid` identity, the
/// tag, then the message.
pub const ONELINE: &str = "\x1b[1;3{color}m{type}\x1b[0;3{color}m [{date}] ({username}@{hostname} {pid}:{ppid}) \x1b[0;3m{tag}\x1b[0m - {message}";

/// Built-in `short` template: `oneline` without the identity segment.
pub const SHORT: &str =
    "\x1b[1;3{color}m{type}\x1b[0;3{color}m [{date}] \x1b[0;3m{tag}\x1b[0m - {message}";

/// Field values for one rendering pass, all pre-formatted as strings.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    pub type_name: &'a str,
    pub level: &'a str,
    pub color: &'a str,
    pub date: &'a str,
    pub username: &'a str,
    pub hostname: &'a str,
    pub pid: &'a str,
    pub ppid: &'a str,
    pub tag: &'a str,
    pub message: &'a str,
}

impl<'a> Fields<'a> {
    fn lookup(&self, token: &str) -> Option<&'a str> {
        Some(match token {
            "type" => self.type_name,
            "level" => self.level,
            "color" => self.color,
            "date" => self.date,
            "username" => self.username,
            "hostname" => self.hostname,
            "pid" => self.pid,
            "ppid" => self.ppid,
            "tag" => self.tag,
            "message" => self.message,
            _ => return None,
        })
    }
}

/// Substitute every recognized placeholder token in `template`.
///
/// Unrecognized `{...}` sequences and unbalanced braces are copied
/// through literally.
pub fn render(template: &str, fields: &Fields<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        // token body runs to the next brace of either kind
        match tail[1..].find(['{', '}']) {
            Some(pos) if tail.as_bytes()[1 + pos] == b'}' => {
                if let Some(value) = fields.lookup(&tail[1..1 + pos]) {
                    out.push_str(value);
                    rest = &tail[pos + 2..];
                } else {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
            _ => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Remove every ANSI escape sequence of the form `ESC [ <params> <final>`
/// where the params are digits, semicolons, or minus signs (possibly
/// empty) and the final byte is `m`, `G`, or `K`. Anything else,
/// including a bare ESC, is copied through untouched.
///
/// The minus sign is accepted because a level carrying the `"no"` color
/// sentinel renders `{color}` as `-1`, turning the color-coded prefix of
/// the built-in templates into `ESC [1;3-1m`; that sequence must still
/// be removed, since stripping is exactly what the sentinel demands.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('\x1b') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let bytes = tail.as_bytes();
        if bytes.len() >= 2 && bytes[1] == b'[' {
            let mut end = 2;
            while end < bytes.len()
                && (bytes[end].is_ascii_digit() || bytes[end] == b';' || bytes[end] == b'-')
            {
                end += 1;
            }
            if end < bytes.len() && matches!(bytes[end], b'm' | b'G' | b'K') {
                rest = &tail[end + 1..];
                continue;
            }
        }
        out.push('\x1b');
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}

/// Field order here pins the key order of the built-in `json` template:
/// type, level, date, pid, ppid, username, hostname, tag, message.
#[derive(Serialize)]
struct JsonTemplate {
    #[serde(rename = "type")]
    type_name: &'static str,
    level: &'static str,
    date: &'static str,
    pid: &'static str,
    ppid: &'static str,
    username: &'static str,
    hostname: &'static str,
    tag: &'static str,
    message: &'static str,
}

fn json_template() -> String {
    // every value is the literal token for that field, so substitution
    // yields valid JSON as long as no substituted value contains
    // unescaped quotes or control characters (documented limitation)
    serde_json::to_string(&JsonTemplate {
        type_name: "{type}",
        level: "{level}",
        date: "{date}",
        pid: "{pid}",
        ppid: "{ppid}",
        username: "{username}",
        hostname: "{hostname}",
        tag: "{tag}",
        message: "{message}",
    })
    .unwrap_or_default()
}

/// Named mapping from format-name to template string, seeded with the
/// built-in `oneline`, `short`, and `json` entries.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: HashMap<String, String>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        let mut formats = HashMap::new();
        formats.insert("oneline".to_string(), ONELINE.to_string());
        formats.insert("short".to_string(), SHORT.to_string());
        formats.insert("json".to_string(), json_template());
        Self { formats }
    }

    /// Insert or overwrite a named template. Built-in names may be
    /// overwritten too.
    pub fn set(&mut self, name: &str, template: &str) {
        self.formats.insert(name.to_string(), template.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.formats.get(name).map(String::as_str)
    }

    /// The registered template for `name`, or `name` itself as a literal
    /// one-off template when no such name is registered.
    pub fn select(&self, name: &str) -> String {
        self.formats
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
