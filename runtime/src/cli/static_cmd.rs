//! `doctar-sitemap static` — write a complete sitemap from the built-in tables only.

use crate::cli::output::{self, OutputMode};
use crate::config::SitemapConfig;
use crate::sitemap::builder::SitemapBuilder;
use crate::sitemap::delivery;
use anyhow::{Context, Result};
use chrono::Utc;

/// Run the static command. Never touches the network.
pub fn run(config: &SitemapConfig, mode: OutputMode) -> Result<()> {
    let builder = SitemapBuilder::new(&config.base_url, Utc::now());
    let written = delivery::write_static(&builder, &config.out_dir)
        .with_context(|| format!("writing static sitemap into {}", config.out_dir.display()))?;

    output::report_written(mode, builder.base_url(), &written);
    Ok(())
}
