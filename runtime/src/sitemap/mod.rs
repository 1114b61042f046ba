//! Sitemap engine: URL tables, generators, remote sources, XML rendering, and delivery.

pub mod builder;
pub mod catalog;
pub mod delivery;
pub mod generators;
pub mod inspect;
pub mod sources;
pub mod types;
pub mod writer;
