//! Server configuration, read from environment variables.

use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::session::CleanupConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_TTL_HOURS: u64 = 24;
const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub session_ttl: Duration,
    pub cleanup_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_HOURS * 60 * 60),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `SESSION_TTL_HOURS` and `CLEANUP_INTERVAL_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT);
        let ttl_hours = parse_or(&lookup, "SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS);
        let session_ttl = ttl_from_hours(ttl_hours).unwrap_or_else(|| {
            warn!(
                key = "SESSION_TTL_HOURS",
                value = ttl_hours,
                default = DEFAULT_SESSION_TTL_HOURS,
                "Session TTL out of range, using default"
            );
            Duration::from_secs(DEFAULT_SESSION_TTL_HOURS * 60 * 60)
        });
        let interval_secs = parse_or(&lookup, "CLEANUP_INTERVAL_SECS", DEFAULT_CLEANUP_INTERVAL_SECS)
            .max(1);

        Self {
            host,
            port,
            session_ttl,
            cleanup_interval: Duration::from_secs(interval_secs),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cleanup_config(&self) -> CleanupConfig {
        CleanupConfig {
            cleanup_interval: self.cleanup_interval,
            session_ttl: self.session_ttl,
        }
    }
}

/// `None` when the TTL overflows or is too large for timestamp arithmetic
fn ttl_from_hours(hours: u64) -> Option<Duration> {
    let ttl = Duration::from_secs(hours.checked_mul(60 * 60)?);
    chrono::Duration::from_std(ttl).ok().map(|_| ttl)
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Invalid config value, using default");
            default
        }),
    }
}
