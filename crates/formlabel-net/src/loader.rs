//! Document Loader
//!
//! Fetches pages with a robots.txt check and per-host politeness delay.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::{DocumentInput, FetchError, HostRateLimiter, RobotsTxt};

/// Loader configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// `User-Agent` header sent on every request
    pub user_agent: String,
    /// Token matched against robots.txt `User-agent` lines
    pub robots_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Minimum delay between requests to one host, robots.txt included
    pub min_host_delay: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            user_agent: "AccessibilityAnalysisTool/1.0".to_string(),
            robots_agent: "AccessibilityAnalysisTool".to_string(),
            timeout: Duration::from_secs(10),
            min_host_delay: Duration::from_secs(1),
        }
    }
}

/// Obtains HTML for the analyzer
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    client: Client,
    limiter: HostRateLimiter,
    config: LoaderConfig,
}

impl DocumentLoader {
    /// Loader with its own limiter built from `config.min_host_delay`
    pub fn new(config: LoaderConfig) -> Result<Self, FetchError> {
        let limiter = HostRateLimiter::new(config.min_host_delay);
        Self::with_limiter(config, limiter)
    }

    /// Loader sharing an existing limiter
    pub fn with_limiter(config: LoaderConfig, limiter: HostRateLimiter) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, limiter, config })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Raw HTML is returned unchanged; URLs are fetched
    pub async fn load(&self, text: &str) -> Result<String, FetchError> {
        match DocumentInput::classify(text) {
            DocumentInput::Html(html) => Ok(html),
            DocumentInput::Url(url) => self.fetch(&url).await,
        }
    }

    /// Fetch a page after checking robots.txt and waiting for the host's slot
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        if !self.is_allowed_by_robots(url).await? {
            tracing::warn!("robots.txt disallows {}", url);
            return Err(FetchError::Disallowed { url: url.to_string() });
        }

        self.limiter.until_ready(&host_key(url)).await;

        tracing::info!("HTTP GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Network { url: url.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("HTTP {} for {}", status, url);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network { url: url.to_string(), source })?;
        tracing::debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }

    /// Check `url`'s path against the host's robots.txt.
    ///
    /// A missing or non-200 robots.txt allows everything; failing to reach
    /// the host at all is an error.
    pub async fn is_allowed_by_robots(&self, url: &Url) -> Result<bool, FetchError> {
        let robots_url = robots_url(url);
        self.limiter.until_ready(&host_key(url)).await;
        tracing::debug!("Checking {}", robots_url);

        let response = self
            .client
            .get(robots_url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Robots { url: robots_url.to_string(), source })?;

        if response.status() != StatusCode::OK {
            return Ok(true);
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Robots { url: robots_url.to_string(), source })?;
        Ok(RobotsTxt::parse(&body).is_allowed(url.path(), &self.config.robots_agent))
    }
}

/// `<scheme>://<host>[:port]/robots.txt` for `url`
fn robots_url(url: &Url) -> Url {
    let mut robots = url.clone();
    robots.set_path("/robots.txt");
    robots.set_query(None);
    robots.set_fragment(None);
    robots
}

/// Rate-limit key: host plus effective port
fn host_key(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port_or_known_default() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
