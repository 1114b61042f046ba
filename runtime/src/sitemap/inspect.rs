//! Parse rendered sitemap XML back to check it and count its entries.

use crate::error::{Result, SitemapError};
use quick_xml::events::Event;
use serde::Serialize;

/// Element counts of a rendered sitemap or sitemap index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct XmlSummary {
    /// `urlset` or `sitemapindex`.
    pub root: String,
    pub urls: usize,
    pub sitemaps: usize,
    pub locs: usize,
    /// Text of every `<loc>`, in document order.
    #[serde(skip)]
    pub loc_values: Vec<String>,
}

impl XmlSummary {
    /// Number of entries, whichever kind the root holds.
    pub fn entries(&self) -> usize {
        self.urls + self.sitemaps
    }
}

/// Parse `xml` fully, failing on any syntax error or unbalanced tag.
pub fn summarize(xml: &str) -> Result<XmlSummary> {
    let mut summary = XmlSummary::default();
    let mut in_loc = false;

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader.config_mut().check_end_names = true;
    reader.config_mut().check_comments = true;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match name.as_str() {
                    "url" => summary.urls += 1,
                    "sitemap" => summary.sitemaps += 1,
                    "loc" => {
                        summary.locs += 1;
                        in_loc = true;
                    }
                    _ => {}
                }
                if summary.root.is_empty() {
                    summary.root = name;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if summary.root.is_empty() {
                    summary.root = String::from_utf8_lossy(e.name().as_ref()).to_string();
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_loc {
                    let text = e
                        .unescape()
                        .map_err(|err| SitemapError::Malformed(err.to_string()))?;
                    summary.loc_values.push(text.trim().to_string());
                }
            }
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"loc" {
                    in_loc = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SitemapError::Malformed(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if summary.root.is_empty() {
        return Err(SitemapError::Malformed("no root element".to_string()));
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_urlset() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://doctar.in/</loc><priority>1.0</priority></url>
  <url><loc>https://doctar.in/search?q=a&amp;b</loc></url>
</urlset>"#;
        let summary = summarize(xml).unwrap();
        assert_eq!(summary.root, "urlset");
        assert_eq!(summary.urls, 2);
        assert_eq!(summary.locs, 2);
        assert_eq!(summary.entries(), 2);
        assert_eq!(summary.loc_values[1], "https://doctar.in/search?q=a&b");
    }

    #[test]
    fn test_summarize_index() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>https://doctar.in/sitemap-blogs.xml</loc></sitemap>
</sitemapindex>"#;
        let summary = summarize(xml).unwrap();
        assert_eq!(summary.root, "sitemapindex");
        assert_eq!(summary.sitemaps, 1);
        assert_eq!(summary.urls, 0);
    }

    #[test]
    fn test_summarize_rejects_mismatched_tags() {
        let xml = "<urlset><url><loc>x</url></urlset>";
        assert!(matches!(summarize(xml), Err(SitemapError::Malformed(_))));
    }

    #[test]
    fn test_summarize_rejects_double_dash_comment() {
        let xml = "<!-- built for a---b.in -->\n<urlset></urlset>";
        assert!(matches!(summarize(xml), Err(SitemapError::Malformed(_))));
    }

    #[test]
    fn test_summarize_rejects_empty() {
        assert!(summarize("").is_err());
    }
}
