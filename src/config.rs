//! Server configuration from environment variables.
//!
//! HOST (default 0.0.0.0), PORT (default 8080), SESSION_TTL_HOURS (default 12),
//! CLEANUP_INTERVAL_MINUTES (default 30). Values that fail to parse use the default.

use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Sessions not accessed for this long are removed.
    pub session_ttl: Duration,
    /// How often the cleanup task runs.
    pub cleanup_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_ttl: Duration::from_secs(12 * 3600),
            cleanup_interval: Duration::from_secs(30 * 60),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse_u64 = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok()).filter(|v| *v > 0);
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            session_ttl: parse_u64("SESSION_TTL_HOURS")
                .and_then(|h| h.checked_mul(3600))
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_ttl),
            cleanup_interval: parse_u64("CLEANUP_INTERVAL_MINUTES")
                .and_then(|m| m.checked_mul(60))
                .map(Duration::from_secs)
                .unwrap_or(defaults.cleanup_interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let c = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("SESSION_TTL_HOURS", "2"),
            ("CLEANUP_INTERVAL_MINUTES", "5"),
        ]);
        assert_eq!(c.host, "127.0.0.1");
        assert_eq!(c.port, 3000);
        assert_eq!(c.session_ttl, Duration::from_secs(7200));
        assert_eq!(c.cleanup_interval, Duration::from_secs(300));
    }

    #[test]
    fn bad_values_fall_back() {
        let c = config(&[("PORT", "eighty"), ("SESSION_TTL_HOURS", "0")]);
        assert_eq!(c.port, 8080);
        assert_eq!(c.session_ttl, AppConfig::default().session_ttl);
    }

    #[test]
    fn overflowing_durations_fall_back() {
        let c = config(&[
            ("SESSION_TTL_HOURS", "18446744073709551615"),
            ("CLEANUP_INTERVAL_MINUTES", "18446744073709551615"),
        ]);
        assert_eq!(c.session_ttl, AppConfig::default().session_ttl);
        assert_eq!(c.cleanup_interval, AppConfig::default().cleanup_interval);
    }
}
