//! Server configuration from `FORMLABEL_*` environment variables.
//!
//! Unset or unparsable values fall back to defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use formlabel_a11y::AnalyzerOptions;
use formlabel_net::LoaderConfig;

pub const ENV_BIND_ADDR: &str = "FORMLABEL_BIND_ADDR";
pub const ENV_MAX_BODY_BYTES: &str = "FORMLABEL_MAX_BODY_BYTES";
pub const ENV_FETCH_TIMEOUT_MS: &str = "FORMLABEL_FETCH_TIMEOUT_MS";
pub const ENV_MIN_HOST_DELAY_MS: &str = "FORMLABEL_MIN_HOST_DELAY_MS";
pub const ENV_USER_AGENT: &str = "FORMLABEL_USER_AGENT";
pub const ENV_SNIPPET_MAX_CHARS: &str = "FORMLABEL_SNIPPET_MAX_CHARS";
pub const ENV_CONTEXT_MAX_CHARS: &str = "FORMLABEL_CONTEXT_MAX_CHARS";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
    pub loader: LoaderConfig,
    pub analyzer: AnalyzerOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_body_bytes: 5 * 1024 * 1024,
            loader: LoaderConfig::default(),
            analyzer: AnalyzerOptions::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |name: &str| lookup(name).and_then(|v| v.trim().parse::<u64>().ok());

        let user_agent = lookup(ENV_USER_AGENT)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.loader.user_agent);

        Self {
            bind_addr: lookup(ENV_BIND_ADDR)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.bind_addr),
            max_body_bytes: parsed(ENV_MAX_BODY_BYTES)
                .map(|v| v as usize)
                .unwrap_or(defaults.max_body_bytes),
            loader: LoaderConfig {
                user_agent,
                robots_agent: defaults.loader.robots_agent,
                timeout: parsed(ENV_FETCH_TIMEOUT_MS)
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.loader.timeout),
                min_host_delay: parsed(ENV_MIN_HOST_DELAY_MS)
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.loader.min_host_delay),
            },
            analyzer: AnalyzerOptions {
                snippet_max_chars: parsed(ENV_SNIPPET_MAX_CHARS)
                    .map(|v| v as usize)
                    .unwrap_or(defaults.analyzer.snippet_max_chars),
                context_max_chars: parsed(ENV_CONTEXT_MAX_CHARS)
                    .map(|v| v as usize)
                    .unwrap_or(defaults.analyzer.context_max_chars),
            },
        }
    }
}
