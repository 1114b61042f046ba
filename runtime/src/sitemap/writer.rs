//! Render sitemap documents as sitemap-protocol XML.

use super::types::{format_lastmod, SitemapDocument, SitemapIndexDocument, UrlRecord, SITEMAP_NAMESPACE};
use crate::error::{Result, SitemapError};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

type XmlWriter = Writer<Vec<u8>>;

/// Render a `<urlset>` document.
///
/// Optional fields are omitted when unset, never emitted empty.
pub fn render_urlset(doc: &SitemapDocument, base_url: &str) -> Result<String> {
    let mut writer = start_document(doc.comment.as_deref())?;

    emit(
        &mut writer,
        Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)])),
    )?;
    for record in &doc.urls {
        write_url(&mut writer, record, base_url)?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    Ok(finish(writer))
}

/// Render a `<sitemapindex>` pointing at `{base_url}/{filename}` children.
pub fn render_index(index: &SitemapIndexDocument, base_url: &str) -> Result<String> {
    let mut writer = start_document(None)?;
    let base = base_url.trim_end_matches('/');

    emit(
        &mut writer,
        Event::Start(BytesStart::new("sitemapindex").with_attributes([("xmlns", SITEMAP_NAMESPACE)])),
    )?;
    for entry in &index.entries {
        emit(&mut writer, Event::Start(BytesStart::new("sitemap")))?;
        text_element(&mut writer, "loc", &format!("{base}/{}", entry.filename))?;
        text_element(&mut writer, "lastmod", &format_lastmod(&entry.lastmod))?;
        emit(&mut writer, Event::End(BytesEnd::new("sitemap")))?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("sitemapindex")))?;

    Ok(finish(writer))
}

fn start_document(comment: Option<&str>) -> Result<XmlWriter> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    if let Some(comment) = comment {
        let body = format!(" {} ", comment_body(comment));
        emit(&mut writer, Event::Comment(BytesText::from_escaped(body)))?;
    }
    Ok(writer)
}

/// Break up every run of dashes; XML comments may not contain "--".
fn comment_body(comment: &str) -> String {
    let mut out = String::with_capacity(comment.len() + 2);
    let mut prev_dash = false;
    for c in comment.chars() {
        if c == '-' && prev_dash {
            out.push(' ');
        }
        prev_dash = c == '-';
        out.push(c);
    }
    out
}

fn emit(writer: &mut XmlWriter, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(SitemapError::Xml)
}

fn write_url(writer: &mut XmlWriter, record: &UrlRecord, base_url: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("url")))?;
    text_element(writer, "loc", &record.loc(base_url))?;
    if let Some(lastmod) = &record.lastmod {
        text_element(writer, "lastmod", &format_lastmod(lastmod))?;
    }
    if let Some(changefreq) = record.changefreq {
        text_element(writer, "changefreq", changefreq.as_str())?;
    }
    if let Some(priority) = record.priority {
        text_element(writer, "priority", &priority.to_string())?;
    }
    emit(writer, Event::End(BytesEnd::new("url")))?;
    Ok(())
}

fn text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(text))
        .map_err(SitemapError::Xml)?;
    Ok(())
}

fn finish(writer: XmlWriter) -> String {
    let mut xml = String::from_utf8_lossy(&writer.into_inner()).into_owned();
    xml.push('\n');
    xml
}
