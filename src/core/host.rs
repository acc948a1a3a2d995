//! Process and environment metadata provider
//!
//! The logger reads identity fields (`{username}`, `{hostname}`,
//! `{pid}`, `{ppid}`) and the clock through this narrow contract so
//! deterministic values can be injected in tests.

use chrono::{DateTime, Local};

/// Read contract for the metadata substituted into templates.
pub trait HostInfo: Send + Sync {
    fn username(&self) -> &str;
    fn hostname(&self) -> &str;
    fn pid(&self) -> u32;
    fn ppid(&self) -> u32;
    fn now(&self) -> DateTime<Local>;
}

/// Metadata read from the running process. The stable values are
/// resolved once at construction; only the clock is consulted per call.
#[derive(Debug, Clone)]
pub struct SystemHost {
    username: String,
    hostname: String,
    pid: u32,
    ppid: u32,
}

impl SystemHost {
    pub fn new() -> Self {
        Self {
            username: resolve_username(),
            hostname: resolve_hostname(),
            pid: std::process::id(),
            ppid: resolve_ppid(),
        }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostInfo for SystemHost {
    fn username(&self) -> &str {
        &self.username
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn pid(&self) -> u32 {
        self.pid
    }

    fn ppid(&self) -> u32 {
        self.ppid
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Fixed metadata values for deterministic output, mainly in tests.
#[derive(Debug, Clone)]
pub struct FixedHost {
    pub username: String,
    pub hostname: String,
    pub pid: u32,
    pub ppid: u32,
    pub timestamp: DateTime<Local>,
}

impl HostInfo for FixedHost {
    fn username(&self) -> &str {
        &self.username
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn pid(&self) -> u32 {
        self.pid
    }

    fn ppid(&self) -> u32 {
        self.ppid
    }

    fn now(&self) -> DateTime<Local> {
        self.timestamp
    }
}

fn resolve_username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn resolve_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string())
}

#[cfg(unix)]
fn resolve_ppid() -> u32 {
    // getppid cannot fail
    unsafe { libc::getppid() as u32 }
}

#[cfg(not(unix))]
fn resolve_ppid() -> u32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_system_host_has_pid() {
        let host = SystemHost::new();
        assert_eq!(host.pid(), std::process::id());
        assert!(!host.hostname().is_empty());
        assert!(!host.username().is_empty());
    }

    #[test]
    fn test_fixed_host_is_deterministic() {
        let at = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        let host = FixedHost {
            username: "alice".into(),
            hostname: "example".into(),
            pid: 123,
            ppid: 45,
            timestamp: at,
        };
        assert_eq!(host.username(), "alice");
        assert_eq!(host.now(), at);
        assert_eq!(host.now(), host.now());
    }
}
