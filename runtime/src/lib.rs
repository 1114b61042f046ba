//! Sitemap generation for the Doctar doctor-discovery site.
//!
//! Static route tables, location × specialization expansion, search and
//! category pages, and optional remote blog/doctor listings are aggregated
//! into sitemap-protocol XML, either as one file or as an index over
//! per-category files.

pub mod cli;
pub mod config;
pub mod error;
pub mod sitemap;

pub use config::SitemapConfig;
pub use error::{Result, SitemapError};
pub use sitemap::builder::SitemapBuilder;
pub use sitemap::types::{ChangeFreq, Priority, SitemapCategory, SitemapDocument, UrlRecord};
