//! Canonical URL tables for doctar.in.
//!
//! Every output mode draws from these lists; nothing else in the crate
//! hardcodes routes.

use super::types::{ChangeFreq, Priority};

/// A fixed page of the website.
#[derive(Debug, Clone, Copy)]
pub struct StaticPage {
    pub path: &'static str,
    pub priority: Priority,
    pub changefreq: ChangeFreq,
}

const fn page(path: &'static str, hundredths: u8, changefreq: ChangeFreq) -> StaticPage {
    StaticPage {
        path,
        priority: Priority::from_hundredths(hundredths),
        changefreq,
    }
}

pub const STATIC_PAGES: &[StaticPage] = &[
    page("/", 100, ChangeFreq::Daily),
    page("/search", 90, ChangeFreq::Daily),
    page("/doctors", 90, ChangeFreq::Daily),
    page("/blog", 80, ChangeFreq::Daily),
    page("/about", 60, ChangeFreq::Monthly),
    page("/contact", 60, ChangeFreq::Monthly),
    page("/faq", 50, ChangeFreq::Monthly),
    page("/join-as-doctor", 70, ChangeFreq::Monthly),
    page("/login", 40, ChangeFreq::Yearly),
    page("/register", 40, ChangeFreq::Yearly),
    page("/privacy-policy", 30, ChangeFreq::Yearly),
    page("/terms-and-conditions", 30, ChangeFreq::Yearly),
    page("/refund-policy", 30, ChangeFreq::Yearly),
    page("/disclaimer", 30, ChangeFreq::Yearly),
];

pub const MAJOR_LOCATIONS: &[&str] = &[
    "mumbai",
    "delhi",
    "bangalore",
    "hyderabad",
    "chennai",
    "kolkata",
    "pune",
    "ahmedabad",
    "jaipur",
    "surat",
    "lucknow",
    "kanpur",
    "nagpur",
    "indore",
    "thane",
    "bhopal",
    "visakhapatnam",
    "patna",
    "vadodara",
    "ghaziabad",
    "ludhiana",
    "agra",
    "nashik",
    "faridabad",
    "meerut",
    "rajkot",
    "varanasi",
    "srinagar",
    "chandigarh",
    "noida",
];

pub const DOCTOR_SPECIALIZATIONS: &[&str] = &[
    "general-physician",
    "cardiologist",
    "dermatologist",
    "pediatrician",
    "gynecologist",
    "orthopedic",
    "neurologist",
    "psychiatrist",
    "dentist",
    "ent-specialist",
    "ophthalmologist",
    "urologist",
    "gastroenterologist",
    "pulmonologist",
    "endocrinologist",
    "nephrologist",
    "oncologist",
    "rheumatologist",
    "physiotherapist",
    "homeopath",
];

pub const SEARCH_TERMS: &[&str] = &[
    "doctor near me",
    "24x7",
    "online consultation",
    "video consultation",
    "home visit",
    "emergency",
    "clinic",
    "hospital",
    "skin specialist",
    "child specialist",
    "heart specialist",
    "bone specialist",
    "eye specialist",
    "women health",
    "diabetes",
    "blood pressure",
    "fever",
    "covid",
    "mental health",
    "cough & cold",
];

pub const BLOG_CATEGORIES: &[&str] = &[
    "health-tips",
    "nutrition",
    "fitness",
    "mental-health",
    "womens-health",
    "child-care",
    "disease-prevention",
    "medical-news",
];

/// All tables a builder draws from. Tests substitute smaller lists.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub static_pages: &'static [StaticPage],
    pub locations: &'static [&'static str],
    pub specializations: &'static [&'static str],
    pub search_terms: &'static [&'static str],
    pub blog_categories: &'static [&'static str],
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            static_pages: STATIC_PAGES,
            locations: MAJOR_LOCATIONS,
            specializations: DOCTOR_SPECIALIZATIONS,
            search_terms: SEARCH_TERMS,
            blog_categories: BLOG_CATEGORIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(MAJOR_LOCATIONS.len(), 30);
        assert_eq!(DOCTOR_SPECIALIZATIONS.len(), 20);
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        let paths: HashSet<_> = STATIC_PAGES.iter().map(|p| p.path).collect();
        assert_eq!(paths.len(), STATIC_PAGES.len());

        let cities: HashSet<_> = MAJOR_LOCATIONS.iter().collect();
        assert_eq!(cities.len(), MAJOR_LOCATIONS.len());

        let specs: HashSet<_> = DOCTOR_SPECIALIZATIONS.iter().collect();
        assert_eq!(specs.len(), DOCTOR_SPECIALIZATIONS.len());
    }

    #[test]
    fn test_static_paths_are_rooted() {
        assert!(STATIC_PAGES.iter().all(|p| p.path.starts_with('/')));
    }

    #[test]
    fn test_slugs_are_url_safe() {
        let safe = |s: &str| {
            s.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        };
        assert!(MAJOR_LOCATIONS.iter().copied().all(safe));
        assert!(DOCTOR_SPECIALIZATIONS.iter().copied().all(safe));
        assert!(BLOG_CATEGORIES.iter().copied().all(safe));
    }
}
