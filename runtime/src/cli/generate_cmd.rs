//! `doctar-sitemap generate` — write the sitemap index and category files.

use crate::cli::output::{self, OutputMode};
use crate::config::SitemapConfig;
use crate::sitemap::builder::SitemapBuilder;
use crate::sitemap::delivery;
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;

/// Builder wired to whichever remote sources the config names.
pub fn builder_for(config: &SitemapConfig) -> Result<SitemapBuilder> {
    let mut builder = SitemapBuilder::new(&config.base_url, Utc::now());
    let (blogs, doctors) = config.sources().context("configuring remote sources")?;
    if let Some(blogs) = blogs {
        builder = builder.with_blog_source(Arc::new(blogs));
    }
    if let Some(doctors) = doctors {
        builder = builder.with_doctor_source(Arc::new(doctors));
    }
    Ok(builder)
}

/// Run the generate command.
///
/// Writes `sitemap.xml` as an index over per-category files, or as one
/// complete urlset when `single` is set.
pub async fn run(config: &SitemapConfig, single: bool, mode: OutputMode) -> Result<()> {
    let builder = builder_for(config)?;
    let out_dir = &config.out_dir;

    let written = if single {
        delivery::write_single(&builder, out_dir).await
    } else {
        delivery::write_index(&builder, out_dir).await
    }
    .with_context(|| format!("generating sitemaps into {}", out_dir.display()))?;

    output::report_written(mode, builder.base_url(), &written);
    Ok(())
}
