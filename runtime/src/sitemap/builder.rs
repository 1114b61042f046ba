//! Aggregate generator output into sitemap documents.
//!
//! One builder serves all output modes: a single complete urlset, per-category
//! urlsets tied together by an index, or the complete XML as a string.

use super::catalog::Catalog;
use super::generators;
use super::sources::{fetch_or_empty, ContentRecord, ContentSource};
use super::types::{SitemapCategory, SitemapDocument, SitemapIndexDocument, UrlRecord};
use super::writer;
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Records fetched from the remote sources for one run.
#[derive(Debug, Clone, Default)]
pub struct DynamicContent {
    pub blogs: Vec<ContentRecord>,
    pub doctors: Vec<ContentRecord>,
}

/// Builds sitemap documents from the catalog and optional remote sources.
pub struct SitemapBuilder {
    base_url: String,
    catalog: Catalog,
    generated_at: DateTime<Utc>,
    blogs: Option<Arc<dyn ContentSource>>,
    doctors: Option<Arc<dyn ContentSource>>,
}

impl SitemapBuilder {
    /// Create a builder stamping every record with `generated_at`.
    pub fn new(base_url: &str, generated_at: DateTime<Utc>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            catalog: Catalog::default(),
            generated_at,
            blogs: None,
            doctors: None,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_blog_source(mut self, source: Arc<dyn ContentSource>) -> Self {
        self.blogs = Some(source);
        self
    }

    pub fn with_doctor_source(mut self, source: Arc<dyn ContentSource>) -> Self {
        self.doctors = Some(source);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Fetch both remote sources concurrently; failures yield empty lists.
    pub async fn fetch_dynamic(&self) -> DynamicContent {
        let (blogs, doctors) = tokio::join!(
            fetch_optional(self.blogs.as_deref()),
            fetch_optional(self.doctors.as_deref()),
        );
        DynamicContent { blogs, doctors }
    }

    /// Every URL from the static tables, in aggregation order.
    pub fn build_static(&self) -> SitemapDocument {
        self.assemble(&DynamicContent::default())
            .with_comment(format!("Doctar sitemap (static routes) for {}", self.base_url))
    }

    /// Every URL including remote content, in aggregation order.
    pub async fn build_complete(&self) -> SitemapDocument {
        let dynamic = self.fetch_dynamic().await;
        self.assemble(&dynamic)
            .with_comment(format!("Doctar sitemap for {}", self.base_url))
    }

    /// One document per category, in index order.
    pub async fn build_categories(&self) -> Vec<(SitemapCategory, SitemapDocument)> {
        let dynamic = self.fetch_dynamic().await;
        SitemapCategory::ALL
            .iter()
            .map(|&category| {
                let doc: SitemapDocument = self.category_records(category, &dynamic).into_iter().collect();
                debug!("{}: {} urls", category.name(), doc.len());
                (category, doc.with_comment(format!("Doctar {} sitemap", category.name())))
            })
            .collect()
    }

    /// Index referencing each category file, stamped with the generation time.
    pub fn build_index(&self, categories: &[SitemapCategory]) -> SitemapIndexDocument {
        let mut index = SitemapIndexDocument::default();
        for category in categories {
            index.push(category.filename(), self.generated_at);
        }
        index
    }

    /// The complete sitemap rendered to a string, for callers that deliver
    /// it themselves.
    pub async fn render_complete(&self) -> Result<String> {
        let doc = self.build_complete().await;
        writer::render_urlset(&doc, &self.base_url)
    }

    /// Static, location-based, specialization, search, category, then remote.
    pub fn assemble(&self, dynamic: &DynamicContent) -> SitemapDocument {
        let now = self.generated_at;
        let cat = &self.catalog;
        let mut doc = SitemapDocument::new();

        doc.extend(generators::static_pages(cat.static_pages, now));
        doc.extend(generators::location_specializations(
            cat.locations,
            cat.specializations,
            now,
        ));
        doc.extend(generators::hospitals(cat.locations, now));
        doc.extend(generators::specializations(cat.specializations, now));
        doc.extend(generators::search_queries(cat.search_terms, now));
        doc.extend(generators::categories(
            cat.blog_categories,
            cat.specializations,
            now,
        ));
        doc.extend(generators::blog_posts(&dynamic.blogs, now));
        doc.extend(generators::doctor_profiles(&dynamic.doctors, now));

        debug!("assembled {} urls", doc.len());
        doc
    }

    fn category_records(&self, category: SitemapCategory, dynamic: &DynamicContent) -> Vec<UrlRecord> {
        let now = self.generated_at;
        let cat = &self.catalog;
        match category {
            SitemapCategory::Website => generators::static_pages(cat.static_pages, now),
            SitemapCategory::Doctors => generators::doctor_profiles(&dynamic.doctors, now),
            SitemapCategory::Locations => {
                generators::location_specializations(cat.locations, cat.specializations, now)
            }
            SitemapCategory::Specializations => {
                generators::specializations(cat.specializations, now)
            }
            SitemapCategory::Blogs => generators::blog_posts(&dynamic.blogs, now),
            SitemapCategory::Categories => {
                generators::categories(cat.blog_categories, cat.specializations, now)
            }
            SitemapCategory::Search => generators::search_queries(cat.search_terms, now),
            SitemapCategory::Hospitals => generators::hospitals(cat.locations, now),
        }
    }
}

async fn fetch_optional(source: Option<&dyn ContentSource>) -> Vec<ContentRecord> {
    match source {
        Some(source) => fetch_or_empty(source).await,
        None => Vec::new(),
    }
}
