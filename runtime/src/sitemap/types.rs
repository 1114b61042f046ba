//! Sitemap data model: URL records, documents, and index documents.

use crate::error::{Result, SitemapError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sitemaps.org protocol namespace shared by urlsets and indexes.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Crawl-frequency hint for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFreq {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(ChangeFreq::Always),
            "hourly" => Ok(ChangeFreq::Hourly),
            "daily" => Ok(ChangeFreq::Daily),
            "weekly" => Ok(ChangeFreq::Weekly),
            "monthly" => Ok(ChangeFreq::Monthly),
            "yearly" => Ok(ChangeFreq::Yearly),
            "never" => Ok(ChangeFreq::Never),
            _ => Err(SitemapError::InvalidChangeFreq(s.to_string())),
        }
    }
}

/// Relative importance of a URL, stored in hundredths (0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const HIGHEST: Priority = Priority(100);

    /// Build a priority from hundredths, clamping anything above 1.0.
    pub const fn from_hundredths(hundredths: u8) -> Self {
        if hundredths > 100 {
            Priority(100)
        } else {
            Priority(hundredths)
        }
    }

    pub fn hundredths(&self) -> u8 {
        self.0
    }

    pub fn as_f32(&self) -> f32 {
        self.0 as f32 / 100.0
    }
}

impl fmt::Display for Priority {
    /// Renders `0.8`, `0.75`, `1.0`: one decimal unless the value needs two.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac % 10 == 0 {
            write!(f, "{whole}.{}", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}")
        }
    }
}

impl FromStr for Priority {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| SitemapError::InvalidPriority(s.to_string()))?;
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(SitemapError::InvalidPriority(s.to_string()));
        }
        Ok(Priority((value * 100.0).round() as u8))
    }
}

impl Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Render a timestamp the way browsers print `Date.toISOString()`.
pub fn format_lastmod(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlRecord {
    path: String,
    pub priority: Option<Priority>,
    pub changefreq: Option<ChangeFreq>,
    pub lastmod: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Create a record with no optional fields set.
    ///
    /// Fails unless `path` is non-empty and starts with `/`.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(SitemapError::InvalidPath(path));
        }
        Ok(Self {
            path,
            priority: None,
            changefreq: None,
            lastmod: None,
        })
    }

    /// Record used by the generators, whose paths are built from `/`-prefixed
    /// templates and therefore always valid.
    pub(crate) fn page(
        path: String,
        priority: Priority,
        changefreq: ChangeFreq,
        lastmod: DateTime<Utc>,
    ) -> Self {
        debug_assert!(path.starts_with('/'));
        Self {
            path,
            priority: Some(priority),
            changefreq: Some(changefreq),
            lastmod: Some(lastmod),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    pub fn with_lastmod(mut self, lastmod: DateTime<Utc>) -> Self {
        self.lastmod = Some(lastmod);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute location: base URL with trailing slashes removed, then path.
    pub fn loc(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// An ordered set of URL records rendered as one `<urlset>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SitemapDocument {
    pub comment: Option<String>,
    pub urls: Vec<UrlRecord>,
}

impl SitemapDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = UrlRecord>) {
        self.urls.extend(records);
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl FromIterator<UrlRecord> for SitemapDocument {
    fn from_iter<I: IntoIterator<Item = UrlRecord>>(iter: I) -> Self {
        Self {
            comment: None,
            urls: iter.into_iter().collect(),
        }
    }
}

/// A child sitemap referenced from an index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapIndexEntry {
    pub filename: String,
    pub lastmod: DateTime<Utc>,
}

/// A `<sitemapindex>` listing child sitemap files.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SitemapIndexDocument {
    pub entries: Vec<SitemapIndexEntry>,
}

impl SitemapIndexDocument {
    pub fn push(&mut self, filename: impl Into<String>, lastmod: DateTime<Utc>) {
        self.entries.push(SitemapIndexEntry {
            filename: filename.into(),
            lastmod,
        });
    }
}

/// Sub-sitemaps written in index mode, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SitemapCategory {
    Website,
    Doctors,
    Locations,
    Specializations,
    Blogs,
    Categories,
    Search,
    Hospitals,
}

impl SitemapCategory {
    pub const ALL: [SitemapCategory; 8] = [
        SitemapCategory::Website,
        SitemapCategory::Doctors,
        SitemapCategory::Locations,
        SitemapCategory::Specializations,
        SitemapCategory::Blogs,
        SitemapCategory::Categories,
        SitemapCategory::Search,
        SitemapCategory::Hospitals,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SitemapCategory::Website => "website",
            SitemapCategory::Doctors => "doctors",
            SitemapCategory::Locations => "locations",
            SitemapCategory::Specializations => "specializations",
            SitemapCategory::Blogs => "blogs",
            SitemapCategory::Categories => "categories",
            SitemapCategory::Search => "search",
            SitemapCategory::Hospitals => "hospitals",
        }
    }

    pub fn filename(&self) -> String {
        format!("sitemap-{}.xml", self.name())
    }
}
