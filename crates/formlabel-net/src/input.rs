//! Caller input classification

use url::Url;

/// What the caller submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
    /// Markup to analyze as-is
    Html(String),
    /// Page to fetch
    Url(Url),
}

impl DocumentInput {
    /// Absolute `http`/`https` URLs with a host are fetched; everything
    /// else is treated as raw HTML and kept verbatim.
    pub fn classify(text: &str) -> Self {
        match Url::parse(text.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => {
                DocumentInput::Url(url)
            }
            _ => DocumentInput::Html(text.to_string()),
        }
    }
}
