//! Per-category URL set generators.
//!
//! Each generator is a pure function of its input table and the generation
//! timestamp.

use super::catalog::StaticPage;
use super::sources::ContentRecord;
use super::types::{ChangeFreq, Priority, UrlRecord};
use chrono::{DateTime, Utc};

const CITY_PRIORITY: Priority = Priority::from_hundredths(80);
const CITY_SPECIALIZATION_PRIORITY: Priority = Priority::from_hundredths(70);
const SPECIALIZATION_PRIORITY: Priority = Priority::from_hundredths(80);
const CATEGORY_PRIORITY: Priority = Priority::from_hundredths(60);
const CATEGORY_SPECIALIZATION_PRIORITY: Priority = Priority::from_hundredths(70);
const SEARCH_PRIORITY: Priority = Priority::from_hundredths(60);
const HOSPITAL_PRIORITY: Priority = Priority::from_hundredths(60);
const CONTENT_PRIORITY: Priority = Priority::from_hundredths(70);

/// Fixed pages, all stamped with the generation time.
pub fn static_pages(pages: &[StaticPage], now: DateTime<Utc>) -> Vec<UrlRecord> {
    pages
        .iter()
        .map(|p| UrlRecord::page(p.path.to_string(), p.priority, p.changefreq, now))
        .collect()
}

/// `/{city}/doctors` for every city.
pub fn locations(cities: &[&str], now: DateTime<Utc>) -> Vec<UrlRecord> {
    cities
        .iter()
        .map(|city| {
            UrlRecord::page(
                format!("/{city}/doctors"),
                CITY_PRIORITY,
                ChangeFreq::Daily,
                now,
            )
        })
        .collect()
}

/// `/doctors/{specialization}` for every specialization.
pub fn specializations(specializations: &[&str], now: DateTime<Utc>) -> Vec<UrlRecord> {
    specializations
        .iter()
        .map(|spec| {
            UrlRecord::page(
                format!("/doctors/{spec}"),
                SPECIALIZATION_PRIORITY,
                ChangeFreq::Weekly,
                now,
            )
        })
        .collect()
}

/// City pages followed by every city × specialization pair.
///
/// Yields `cities + cities * specializations` records, grouped per city.
pub fn location_specializations(
    cities: &[&str],
    specializations: &[&str],
    now: DateTime<Utc>,
) -> Vec<UrlRecord> {
    let mut out = Vec::with_capacity(cities.len() * (specializations.len() + 1));
    for (city, page) in cities.iter().zip(locations(cities, now)) {
        out.push(page);
        for spec in specializations {
            out.push(UrlRecord::page(
                format!("/{city}/{spec}"),
                CITY_SPECIALIZATION_PRIORITY,
                ChangeFreq::Weekly,
                now,
            ));
        }
    }
    out
}

/// `/search?q={term}` with the term percent-encoded.
pub fn search_queries(terms: &[&str], now: DateTime<Utc>) -> Vec<UrlRecord> {
    terms
        .iter()
        .map(|term| {
            UrlRecord::page(
                format!("/search?q={}", encode_component(term)),
                SEARCH_PRIORITY,
                ChangeFreq::Weekly,
                now,
            )
        })
        .collect()
}

/// Blog category pages, then specialization listings again.
pub fn categories(
    blog_categories: &[&str],
    specializations: &[&str],
    now: DateTime<Utc>,
) -> Vec<UrlRecord> {
    let blog = blog_categories.iter().map(|slug| {
        UrlRecord::page(
            format!("/blog/category/{slug}"),
            CATEGORY_PRIORITY,
            ChangeFreq::Weekly,
            now,
        )
    });
    let doctors = specializations.iter().map(|spec| {
        UrlRecord::page(
            format!("/doctors/{spec}"),
            CATEGORY_SPECIALIZATION_PRIORITY,
            ChangeFreq::Weekly,
            now,
        )
    });
    blog.chain(doctors).collect()
}

/// `/hospitals`, then `/{city}/hospitals` per city.
pub fn hospitals(cities: &[&str], now: DateTime<Utc>) -> Vec<UrlRecord> {
    std::iter::once("/hospitals".to_string())
        .chain(cities.iter().map(|city| format!("/{city}/hospitals")))
        .map(|path| UrlRecord::page(path, HOSPITAL_PRIORITY, ChangeFreq::Weekly, now))
        .collect()
}

/// `/blog/{slug}` per published post.
pub fn blog_posts(records: &[ContentRecord], now: DateTime<Utc>) -> Vec<UrlRecord> {
    content_urls("/blog", records, now)
}

/// `/doctor/{slug}` per doctor profile.
pub fn doctor_profiles(records: &[ContentRecord], now: DateTime<Utc>) -> Vec<UrlRecord> {
    content_urls("/doctor", records, now)
}

fn content_urls(prefix: &str, records: &[ContentRecord], now: DateTime<Utc>) -> Vec<UrlRecord> {
    records
        .iter()
        .filter_map(|record| {
            let key = record.path_key()?;
            Some(UrlRecord::page(
                format!("{prefix}/{}", encode_component(key)),
                CONTENT_PRIORITY,
                ChangeFreq::Weekly,
                record.updated_at().unwrap_or(now),
            ))
        })
        .collect()
}

/// Percent-encode like `encodeURIComponent`: spaces become `%20`, not `+`.
pub fn encode_component(s: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so any '+' left is a space.
    url::form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
