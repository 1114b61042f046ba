//! Generation settings resolved once at startup from flags and environment.

use crate::sitemap::sources::HttpContentSource;
use crate::error::Result;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://doctar.in";
pub const DEFAULT_OUT_DIR: &str = "public";
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Environment variables consulted for the base URL, in order.
const BASE_URL_VARS: &[&str] = &["FRONTEND_URL", "VITE_FRONTEND_URL"];

/// Values given on the command line; they win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub out_dir: Option<PathBuf>,
}

/// Everything a generation run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapConfig {
    /// Origin prepended to every path, without trailing slash.
    pub base_url: String,
    pub out_dir: PathBuf,
    /// Published-blogs endpoint; no blog URLs when unset.
    pub blogs_url: Option<String>,
    /// Doctors endpoint; no doctor URLs when unset.
    pub doctors_url: Option<String>,
    pub fetch_timeout: Duration,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            blogs_url: None,
            doctors_url: None,
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        }
    }
}

impl SitemapConfig {
    /// Resolve from overrides and the process environment.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve from overrides and an arbitrary variable lookup.
    pub fn resolve_with(overrides: ConfigOverrides, env: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let base_url = overrides
            .base_url
            .filter(|v| !v.trim().is_empty())
            .or_else(|| BASE_URL_VARS.iter().find_map(|key| non_empty(*key)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let fetch_timeout = non_empty("SITEMAP_FETCH_TIMEOUT_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_MS);

        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            out_dir: overrides
                .out_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            blogs_url: non_empty("SITEMAP_BLOGS_URL"),
            doctors_url: non_empty("SITEMAP_DOCTORS_URL"),
            fetch_timeout: Duration::from_millis(fetch_timeout),
        }
    }

    /// HTTP sources for whichever endpoints are configured.
    pub fn sources(&self) -> Result<(Option<HttpContentSource>, Option<HttpContentSource>)> {
        let blogs = self
            .blogs_url
            .as_deref()
            .map(|url| HttpContentSource::new("blog", url, self.fetch_timeout))
            .transpose()?;
        let doctors = self
            .doctors_url
            .as_deref()
            .map(|url| HttpContentSource::new("doctor", url, self.fetch_timeout))
            .transpose()?;
        Ok((blogs, doctors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SitemapConfig::resolve_with(ConfigOverrides::default(), env_of(&[]));
        assert_eq!(config, SitemapConfig::default());
        assert_eq!(config.base_url, "https://doctar.in");
        assert_eq!(config.out_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_env_precedence() {
        let config = SitemapConfig::resolve_with(
            ConfigOverrides::default(),
            env_of(&[
                ("FRONTEND_URL", "https://staging.doctar.in/"),
                ("VITE_FRONTEND_URL", "https://vite.doctar.in"),
            ]),
        );
        assert_eq!(config.base_url, "https://staging.doctar.in");

        let config = SitemapConfig::resolve_with(
            ConfigOverrides::default(),
            env_of(&[("FRONTEND_URL", ""), ("VITE_FRONTEND_URL", "https://vite.doctar.in")]),
        );
        assert_eq!(config.base_url, "https://vite.doctar.in");
    }

    #[test]
    fn test_flag_beats_env() {
        let overrides = ConfigOverrides {
            base_url: Some("http://localhost:5173".to_string()),
            out_dir: Some(PathBuf::from("dist")),
        };
        let config = SitemapConfig::resolve_with(
            overrides,
            env_of(&[("FRONTEND_URL", "https://staging.doctar.in")]),
        );
        assert_eq!(config.base_url, "http://localhost:5173");
        assert_eq!(config.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_sources_from_env() {
        let config = SitemapConfig::resolve_with(
            ConfigOverrides::default(),
            env_of(&[
                ("SITEMAP_BLOGS_URL", "http://api.local/blogs/published"),
                ("SITEMAP_FETCH_TIMEOUT_MS", "2500"),
            ]),
        );
        assert_eq!(config.fetch_timeout, Duration::from_millis(2500));
        let (blogs, doctors) = config.sources().unwrap();
        assert_eq!(blogs.unwrap().url(), "http://api.local/blogs/published");
        assert!(doctors.is_none());
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        let config = SitemapConfig::resolve_with(
            ConfigOverrides::default(),
            env_of(&[("SITEMAP_FETCH_TIMEOUT_MS", "soon")]),
        );
        assert_eq!(config.fetch_timeout, Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS));
    }
}
