//! Error types for sitemap generation.

use std::path::PathBuf;

/// Errors raised while building, rendering, or delivering sitemaps.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// A URL path that does not start with `/`.
    #[error("invalid sitemap path '{0}': must be non-empty and start with '/'")]
    InvalidPath(String),

    #[error("invalid priority '{0}': expected a decimal between 0.0 and 1.0")]
    InvalidPriority(String),

    #[error("invalid changefreq '{0}'")]
    InvalidChangeFreq(String),

    /// The upstream request could not be sent or its body could not be read.
    #[error("fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("decoding records from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("writing XML: {0}")]
    Xml(#[source] std::io::Error),

    /// Produced XML failed to parse back.
    #[error("malformed XML: {0}")]
    Malformed(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SitemapError>;
