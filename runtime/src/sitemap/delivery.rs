//! Write rendered sitemaps to disk.

use super::builder::SitemapBuilder;
use super::inspect::{self, XmlSummary};
use super::types::SitemapCategory;
use super::writer;
use crate::error::{Result, SitemapError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the top-level sitemap in every mode.
pub const ROOT_SITEMAP: &str = "sitemap.xml";

/// A file produced by a delivery run.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub entries: usize,
}

/// Check `xml` parses, then write it to `dir/filename`, creating `dir` if
/// needed and replacing any existing file.
pub fn write_xml(dir: &Path, filename: &str, xml: &str) -> Result<WrittenFile> {
    let summary: XmlSummary = inspect::summarize(xml)?;

    std::fs::create_dir_all(dir).map_err(|source| SitemapError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(filename);
    std::fs::write(&path, xml).map_err(|source| SitemapError::Io {
        path: path.clone(),
        source,
    })?;

    info!("wrote {} ({} entries)", path.display(), summary.entries());
    Ok(WrittenFile {
        path,
        bytes: xml.len(),
        entries: summary.entries(),
    })
}

/// Write one complete `sitemap.xml`, including remote content.
pub async fn write_single(builder: &SitemapBuilder, dir: &Path) -> Result<Vec<WrittenFile>> {
    let doc = builder.build_complete().await;
    let xml = writer::render_urlset(&doc, builder.base_url())?;
    Ok(vec![write_xml(dir, ROOT_SITEMAP, &xml)?])
}

/// Write one `sitemap.xml` from the static tables alone.
pub fn write_static(builder: &SitemapBuilder, dir: &Path) -> Result<Vec<WrittenFile>> {
    let doc = builder.build_static();
    let xml = writer::render_urlset(&doc, builder.base_url())?;
    Ok(vec![write_xml(dir, ROOT_SITEMAP, &xml)?])
}

/// Write every category file, then `sitemap.xml` as an index over them.
///
/// The index is written last so it never references a missing file.
pub async fn write_index(builder: &SitemapBuilder, dir: &Path) -> Result<Vec<WrittenFile>> {
    let docs = builder.build_categories().await;
    let mut written = Vec::with_capacity(docs.len() + 1);
    let mut categories: Vec<SitemapCategory> = Vec::with_capacity(docs.len());

    for (category, doc) in &docs {
        let xml = writer::render_urlset(doc, builder.base_url())?;
        written.push(write_xml(dir, &category.filename(), &xml)?);
        categories.push(*category);
    }

    let index = builder.build_index(&categories);
    let xml = writer::render_index(&index, builder.base_url())?;
    written.push(write_xml(dir, ROOT_SITEMAP, &xml)?);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_xml_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("public").join("nested");
        let xml = "<?xml version=\"1.0\"?>\n<urlset><url><loc>https://doctar.in/</loc></url></urlset>\n";

        let file = write_xml(&dir, "sitemap.xml", xml).unwrap();
        assert_eq!(file.entries, 1);
        assert_eq!(std::fs::read_to_string(dir.join("sitemap.xml")).unwrap(), xml);
    }

    #[test]
    fn test_write_xml_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("sitemap.xml"), "old").unwrap();
        write_xml(tmp.path(), "sitemap.xml", "<urlset/>").unwrap();
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap(),
            "<urlset/>"
        );
    }

    #[test]
    fn test_write_xml_refuses_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        let err = write_xml(tmp.path(), "sitemap.xml", "<urlset><url></urlset>").unwrap_err();
        assert!(matches!(err, SitemapError::Malformed(_)));
        assert!(!tmp.path().join("sitemap.xml").exists());
    }

    #[test]
    fn test_write_xml_unwritable_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let err = write_xml(&blocker.join("sub"), "sitemap.xml", "<urlset/>").unwrap_err();
        assert!(matches!(err, SitemapError::Io { .. }));
    }
}
