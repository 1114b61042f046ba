//! `doctar-sitemap print` — render the complete sitemap to stdout.

use crate::cli::generate_cmd::builder_for;
use crate::config::SitemapConfig;
use anyhow::{Context, Result};
use std::io::Write;

/// Run the print command.
pub async fn run(config: &SitemapConfig) -> Result<()> {
    let builder = builder_for(config)?;
    let xml = builder.render_complete().await.context("rendering sitemap")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(xml.as_bytes()).context("writing to stdout")?;
    stdout.flush()?;
    Ok(())
}
