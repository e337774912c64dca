use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("corpora/", env!("CARGO_PKG_VERSION"));

pub const ENV_USER_AGENT: &str = "CORPORA_USER_AGENT";
pub const ENV_CONNECT_TIMEOUT: &str = "CORPORA_CONNECT_TIMEOUT";
pub const ENV_REQUEST_TIMEOUT: &str = "CORPORA_REQUEST_TIMEOUT";

/// Transport settings for HTTP retrieval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Connection timeout in seconds
    pub connect_timeout_seconds: u32,
    /// Whole-request timeout in seconds
    pub request_timeout_seconds: u32,
    /// User agent sent with every request (crate default when unset)
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: 30,
            request_timeout_seconds: 120,
            user_agent: None,
        }
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_seconds))
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Override fields from `CORPORA_*` environment variables.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(ua) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            self.user_agent = Some(ua);
        }
        if let Some(secs) = parse_seconds(ENV_CONNECT_TIMEOUT, lookup(ENV_CONNECT_TIMEOUT)) {
            self.connect_timeout_seconds = secs;
        }
        if let Some(secs) = parse_seconds(ENV_REQUEST_TIMEOUT, lookup(ENV_REQUEST_TIMEOUT)) {
            self.request_timeout_seconds = secs;
        }
    }
}

fn parse_seconds(key: &str, value: Option<String>) -> Option<u32> {
    let value = value?;
    match value.trim().parse() {
        Ok(secs) => Some(secs),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a whole number of seconds", key, value);
            None
        }
    }
}
