use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("doctar-sitemap").unwrap();
    for var in [
        "FRONTEND_URL",
        "VITE_FRONTEND_URL",
        "SITEMAP_BLOGS_URL",
        "SITEMAP_DOCTORS_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_unknown_command_fails() {
    cmd()
        .arg("publish")
        .assert()
        .code(1)
        .stderr(contains("publish").and(contains("--help")));
}

#[test]
fn test_help_lists_commands() {
    cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(contains("generate").and(contains("static")));
}

#[test]
fn test_static_uses_env_base_url() {
    let tmp = tempfile::tempdir().unwrap();
    cmd()
        .env("FRONTEND_URL", "https://preview.doctar.in")
        .args(["static", "--quiet", "--out-dir"])
        .arg(tmp.path())
        .assert()
        .success();

    let xml = std::fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap();
    assert!(xml.contains("<loc>https://preview.doctar.in/</loc>"));
    assert!(!xml.contains("https://doctar.in/"));
}

#[test]
fn test_default_command_writes_index() {
    let tmp = tempfile::tempdir().unwrap();
    let assert = cmd()
        .args(["--json", "--out-dir"])
        .arg(tmp.path())
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["ok"], true);
    assert_eq!(report["base_url"], "https://doctar.in");
    assert_eq!(report["files"].as_array().unwrap().len(), 9);

    let index = std::fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap();
    assert!(index.contains("<sitemapindex"));
}

#[test]
fn test_print_writes_xml_to_stdout() {
    cmd()
        .args(["print", "--base-url", "http://localhost:5173/"])
        .assert()
        .success()
        .stdout(contains("<?xml").and(contains("<loc>http://localhost:5173/about</loc>")));
}

#[test]
fn test_unwritable_out_dir_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    cmd()
        .args(["static", "--out-dir"])
        .arg(blocker.join("public"))
        .assert()
        .code(1);
}
