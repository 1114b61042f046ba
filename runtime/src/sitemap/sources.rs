//! Remote content sources for dynamic sitemap entries.
//!
//! The builder only sees the [`ContentSource`] trait, so tests hand it fakes
//! and the binary hands it [`HttpContentSource`]s pointed at the backend.

use crate::error::{Result, SitemapError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

/// Keys under which upstream services nest their record lists.
const LIST_KEYS: &[&str] = &["data", "blogs", "doctors", "items", "results"];

/// A published blog post or doctor profile as returned upstream.
///
/// Both spellings of a key (`id`/`_id`, `updated_at`/`updatedAt`) may
/// appear in one record; the accessors pick between them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "string_or_number")]
    pub object_id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at_camel: Option<String>,
}

impl ContentRecord {
    pub fn new(id: Option<&str>, slug: Option<&str>, updated_at: Option<&str>) -> Self {
        Self {
            id: id.map(String::from),
            slug: slug.map(String::from),
            updated_at: updated_at.map(String::from),
            ..Self::default()
        }
    }

    /// The record identifier: `id`, else `_id`.
    pub fn id(&self) -> Option<&str> {
        first_non_blank([self.id.as_deref(), self.object_id.as_deref()])
    }

    /// The path segment for this record: slug if present, else the id.
    pub fn path_key(&self) -> Option<&str> {
        first_non_blank([self.slug.as_deref(), self.id()])
    }

    /// Update time from `updatedAt` or `updated_at`, when it parses as RFC 3339.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        [self.updated_at_camel.as_deref(), self.updated_at.as_deref()]
            .into_iter()
            .flatten()
            .find_map(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
            .map(|ts| ts.with_timezone(&Utc))
    }
}

fn first_non_blank<const N: usize>(candidates: [Option<&str>; N]) -> Option<&str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Decode a record list from a bare JSON array or an object wrapping one.
pub fn parse_records(body: &str) -> serde_json::Result<Vec<ContentRecord>> {
    let value: Value = serde_json::from_str(body)?;
    let list = find_list(&value, 2).ok_or_else(|| {
        <serde_json::Error as serde::de::Error>::custom("no record list in response")
    })?;
    Vec::<ContentRecord>::deserialize(list)
}

fn find_list(value: &Value, depth: u8) -> Option<&Value> {
    match value {
        Value::Array(_) => Some(value),
        Value::Object(map) if depth > 0 => LIST_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|inner| find_list(inner, depth - 1)),
        _ => None,
    }
}

/// A read-only listing of records that become sitemap URLs.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    async fn list(&self) -> Result<Vec<ContentRecord>>;
}

/// Fetches records with a GET against a JSON endpoint.
pub struct HttpContentSource {
    name: String,
    url: String,
    client: reqwest::Client,
}

impl HttpContentSource {
    pub fn new(name: &str, url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("doctar-sitemap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SitemapError::Fetch {
                url: url.to_string(),
                source,
            })?;
        Ok(Self {
            name: name.to_string(),
            url: url.to_string(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self) -> Result<Vec<ContentRecord>> {
        let fetch_err = |source| SitemapError::Fetch {
            url: self.url.clone(),
            source,
        };

        let resp = self.client.get(&self.url).send().await.map_err(fetch_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SitemapError::UpstreamStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(fetch_err)?;
        parse_records(&body).map_err(|source| SitemapError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

/// List a source, degrading to no records on any failure.
pub async fn fetch_or_empty(source: &dyn ContentSource) -> Vec<ContentRecord> {
    match source.list().await {
        Ok(records) => {
            info!("fetched {} {} records", records.len(), source.name());
            records
        }
        Err(e) => {
            warn!("{} source unavailable, skipping its URLs: {e}", source.name());
            Vec::new()
        }
    }
}
