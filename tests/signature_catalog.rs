//! Tests for signature catalog loading through the public API.

use std::path::PathBuf;

use tempfile::TempDir;
use txtra::error_handling::CatalogError;
use txtra::signature::{CatalogOptions, SignatureCatalog};
use txtra::{load_catalog, Config};

const LEGACY_TEMPLATE: &str = "\
info:
  name: Legacy CNAME
  category: CDN
  author: someone
rule:
  type: cname
  regex:
    - 'cdn\\.example\\.net'
";

const ACME_TEMPLATE: &str = "\
info:
  name: Acme
  category: Verification
  author: someone
rule:
  type: regex
  regex: 'acme-verification=(?P<token>[a-z0-9]+)'
  params:
    - token
";

#[test]
fn test_builtin_catalog_is_ordered_and_unique() {
    let catalog = SignatureCatalog::builtin(CatalogOptions::default()).unwrap();
    let mut names: Vec<&str> = catalog.iter().map(|s| s.name()).collect();
    assert_eq!(names.first(), Some(&"Adobe Acrobat Sign"));
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total, "provider names must be unique");
}

#[test]
fn test_builtin_catalog_every_signature_has_category() {
    let catalog = SignatureCatalog::builtin(CatalogOptions::default()).unwrap();
    for signature in catalog.iter() {
        assert!(
            !signature.category().is_empty(),
            "{} has no category",
            signature.name()
        );
    }
}

#[test]
fn test_single_string_regex_is_accepted() {
    let catalog =
        SignatureCatalog::from_yaml_str(ACME_TEMPLATE, "acme.yml", CatalogOptions::default())
            .unwrap();
    let matches = catalog.scan_value("acme-verification=x1y2");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].token, "x1y2");
    assert_eq!(matches[0].category(), "Verification");
}

#[tokio::test]
async fn test_load_catalog_from_config_directory() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("10-acme.yml"), ACME_TEMPLATE).unwrap();
    std::fs::write(dir.path().join("20-legacy.yml"), LEGACY_TEMPLATE).unwrap();

    let strict = Config {
        signatures: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let err = load_catalog(&strict).await.unwrap_err();
    let cause = err
        .downcast_ref::<CatalogError>()
        .expect("catalog error is the source");
    assert!(matches!(cause, CatalogError::UnsupportedRule { kind, .. } if kind == "cname"));

    let lenient = Config {
        allow_unsupported_rules: true,
        ..strict
    };
    let catalog = load_catalog(&lenient).await.expect("lenient load");
    let names: Vec<&str> = catalog.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Acme", "Legacy CNAME"]);
    assert!(catalog.scan_value("cdn.example.net").is_empty());
}

#[tokio::test]
async fn test_load_catalog_default_is_builtin() {
    let catalog = load_catalog(&Config::default()).await.unwrap();
    assert_eq!(catalog.source(), "built-in");
}

#[tokio::test]
async fn test_load_catalog_missing_path() {
    let config = Config {
        signatures: Some(PathBuf::from("/nonexistent/signatures")),
        ..Default::default()
    };
    let err = load_catalog(&config).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load signatures from"));
}
