//! Session registry limits.
//!
//! - `SESSION_IDLE_TIMEOUT_SECONDS`: idle time after which a session is
//!   evicted (default: `1800`)
//! - `MAX_SESSIONS`: live sessions kept at once (default: `10000`)

use std::env;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub idle_timeout: Duration,
    pub max_sessions: usize,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            idle_timeout: env::var("SESSION_IDLE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.idle_timeout),
            max_sessions: env::var("MAX_SESSIONS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|max| *max > 0)
                .unwrap_or(defaults.max_sessions),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(30 * 60),
            max_sessions: 10_000,
        }
    }
}
