use chrono::{TimeZone, Utc};
use doctar_sitemap::sitemap::delivery::{self, ROOT_SITEMAP};
use doctar_sitemap::sitemap::inspect;
use doctar_sitemap::{SitemapBuilder, SitemapCategory};

fn builder(base: &str) -> SitemapBuilder {
    SitemapBuilder::new(base, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap())
}

#[tokio::test]
async fn test_index_mode_writes_every_category() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("public");

    let written = delivery::write_index(&builder("https://doctar.in"), &out).await.unwrap();
    assert_eq!(written.len(), SitemapCategory::ALL.len() + 1);
    assert_eq!(written.last().unwrap().path, out.join(ROOT_SITEMAP));

    for name in [
        "sitemap-website.xml",
        "sitemap-doctors.xml",
        "sitemap-locations.xml",
        "sitemap-specializations.xml",
        "sitemap-blogs.xml",
        "sitemap-categories.xml",
        "sitemap-search.xml",
        "sitemap-hospitals.xml",
    ] {
        assert!(out.join(name).exists(), "missing {name}");
    }

    let index = std::fs::read_to_string(out.join(ROOT_SITEMAP)).unwrap();
    let summary = inspect::summarize(&index).unwrap();
    assert_eq!(summary.root, "sitemapindex");
    assert_eq!(summary.sitemaps, 8);
    assert!(summary
        .loc_values
        .contains(&"https://doctar.in/sitemap-hospitals.xml".to_string()));

    let locations = std::fs::read_to_string(out.join("sitemap-locations.xml")).unwrap();
    let summary = inspect::summarize(&locations).unwrap();
    assert_eq!(summary.urls, 630);
    assert_eq!(summary.locs, 630);
}

#[tokio::test]
async fn test_single_mode_counts_and_locs() {
    let tmp = tempfile::tempdir().unwrap();
    let b = builder("https://staging.doctar.in/");

    let written = delivery::write_single(&b, tmp.path()).await.unwrap();
    assert_eq!(written.len(), 1);

    let xml = std::fs::read_to_string(tmp.path().join(ROOT_SITEMAP)).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));

    let summary = inspect::summarize(&xml).unwrap();
    let expected = b.build_static();
    assert_eq!(summary.urls, expected.len());
    assert_eq!(summary.locs, expected.len());
    assert_eq!(written[0].entries, expected.len());

    for loc in &summary.loc_values {
        assert!(loc.starts_with("https://staging.doctar.in/"));
        assert!(!loc["https://".len()..].contains("//"), "double slash in {loc}");
    }
    assert!(summary
        .loc_values
        .contains(&"https://staging.doctar.in/search?q=24x7".to_string()));
    assert!(summary
        .loc_values
        .contains(&"https://staging.doctar.in/search?q=cough%20%26%20cold".to_string()));
}

#[test]
fn test_static_mode_is_reproducible() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    delivery::write_static(&builder("https://doctar.in"), a.path()).unwrap();
    delivery::write_static(&builder("https://doctar.in"), b.path()).unwrap();

    let first = std::fs::read(a.path().join(ROOT_SITEMAP)).unwrap();
    let second = std::fs::read(b.path().join(ROOT_SITEMAP)).unwrap();
    assert_eq!(first, second);
}
