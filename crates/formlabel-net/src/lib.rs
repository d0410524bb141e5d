//! formlabel Networking
//!
//! Turns the text submitted by a caller into HTML: raw markup passes
//! straight through, URLs are fetched politely (robots.txt check and a
//! per-host minimum delay).

mod input;
mod limiter;
mod loader;
mod robots;

pub use input::DocumentInput;
pub use limiter::HostRateLimiter;
pub use loader::{DocumentLoader, LoaderConfig};
pub use robots::RobotsTxt;
pub use url::Url;

/// Why a document could not be obtained
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Could not check robots.txt at {url}: {source}")]
    Robots {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching {url} is disallowed by robots.txt")]
    Disallowed { url: String },

    #[error("HTTP error {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
