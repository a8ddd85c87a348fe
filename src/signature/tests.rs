//! Signature catalog tests.

use super::*;
use crate::error_handling::CatalogError;
use tempfile::TempDir;

fn builtin() -> SignatureCatalog {
    SignatureCatalog::builtin(CatalogOptions::default()).expect("built-in catalog loads")
}

/// Asserts that `value` matches exactly `provider` with `token`.
fn assert_single_match(catalog: &SignatureCatalog, value: &str, provider: &str, token: &str) {
    let matches = catalog.scan_value(value);
    let found: Vec<(&str, &str)> = matches
        .iter()
        .map(|m| (m.provider(), m.token.as_str()))
        .collect();
    assert_eq!(found, vec![(provider, token)], "value: {value}");
}

#[test]
fn test_builtin_catalog_loads() {
    let catalog = builtin();
    assert!(catalog.len() > 50);
    assert_eq!(catalog.source(), "built-in");
    assert!(catalog.get("Adobe").is_some());
    assert!(catalog.iter().all(|s| matches!(s.rule(), Rule::Regex(_))));
}

#[test]
fn test_builtin_verification_tokens() {
    let catalog = builtin();
    let cases = [
        ("adobe-sign-verification=test", "Adobe Acrobat Sign", "test"),
        ("adobe-idp-site-verification=test", "Adobe", "test"),
        ("android-enroll=http://example.com", "android mobile mdm", "http://example.com"),
        ("android-mdm-enroll=http://example.com", "android mobile mdm", "http://example.com"),
        ("apple-domain-verification=test", "Apple", "test"),
        ("atlassian-domain-verification=test", "Atlassian", "test"),
        ("amazonses:test", "Amazon Simple Email", "test"),
        ("test.azurewebsites.net", "Azure", "test"),
        ("blitz=test-1234", "Feedblitz", "test-1234"),
        ("citrix-verification-code=test-1234", "Citrix", "test-1234"),
        ("citrix.mobile.ads.otp=test-1234", "Citrix", "test-1234"),
        ("docusign=test", "docusign", "test"),
        ("Dynatrace-site-verification=test", "Dynatrace", "test"),
        ("dynatrace-site-verification=test", "Dynatrace", "test"),
        ("_globalsign-domain-verification=test", "Global Sign", "test"),
        ("globalsign-domain-verification=test", "Global Sign", "test"),
        ("google-site-verification=test", "GMail", "test"),
        ("DZC: test-test.com", "GoDaddy Web Services", "test-test.com"),
        ("godaddyverification=/Hoge==", "GoDaddy Web Services", "/Hoge=="),
        ("worksmobile.certification.test", "LINE WORKS", "test"),
        ("mailru-verification: test", "Mail.Ru", "test"),
        ("ms=12345", "Microsoft Office 365", "12345"),
        ("mscid=test123==", "Microsoft Office 365", "test123=="),
        ("pardot_foo.bar=test", "pardot", "test"),
        ("Sendinblue-code:123456789abcedf", "sendinblue", "123456789abcedf"),
        ("tinfoil-site-verification= test", "tinfosecurity", "test"),
        ("tmes=test", "Trend Micro", "test"),
        ("webaccel: 01234; 56789; abcdef;", "SAKURA Web Accelerator", "01234; 56789; abcdef;"),
        ("webexdomainverification.hoge=01234-5678-9abc-def", "webex", "01234-5678-9abc-def"),
        ("cisco-ci-domain-verification=0123456789abcdef", "webex", "0123456789abcdef"),
        ("wmail-verification: 0123456789abcdef", "wmail", "0123456789abcdef"),
        ("zapier-domain-verification-challenge=test", "Zapier", "test"),
        ("ZOOM_verify_test", "Zoom", "test"),
    ];
    for (value, provider, token) in cases {
        assert_single_match(&catalog, value, provider, token);
    }
}

#[test]
fn test_builtin_spf_senders_have_no_token() {
    let catalog = builtin();
    let matches =
        catalog.scan_value("v=spf1 include:_spf.google.com include:sendgrid.net ~all");
    let providers: Vec<&str> = matches.iter().map(|m| m.provider()).collect();
    assert_eq!(providers, vec!["Google Workspace", "SendGrid"]);
    assert!(matches.iter().all(|m| m.token.is_empty()));
}

#[test]
fn test_builtin_unrelated_value_does_not_match() {
    let catalog = builtin();
    assert!(catalog.scan_value("some random text").is_empty());
    assert!(catalog.scan_value("v=spf1 ip4:192.0.2.1 ~all").is_empty());
}

#[test]
fn test_scan_value_collects_all_matches_in_catalog_order() {
    let yaml = r#"
- info: { name: First, category: A }
  rule: { type: regex, regex: ['verification=(?P<token>\S+)'] }
- info: { name: Unrelated, category: B }
  rule: { type: regex, regex: ['^nothing$'] }
- info: { name: Second, category: C }
  rule: { type: regex, regex: ['^acme-(?P<token>[a-z]+)'] }
"#;
    let catalog = SignatureCatalog::from_yaml_str(yaml, "inline", CatalogOptions::default())
        .expect("valid catalog");
    let matches = catalog.scan_value("acme-site-verification=xyz");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].provider(), "First");
    assert_eq!(matches[0].token, "xyz");
    assert_eq!(matches[1].provider(), "Second");
    assert_eq!(matches[1].token, "site");
}

#[test]
fn test_multi_document_yaml() {
    let yaml = "info: { name: A }\nrule: { type: regex, regex: [a] }\n---\n- info: { name: B }\n  rule: { type: regex, regex: [b] }\n";
    let catalog = SignatureCatalog::from_yaml_str(yaml, "inline", CatalogOptions::default())
        .expect("valid catalog");
    let names: Vec<&str> = catalog.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_unsupported_rule_fails_fast() {
    let yaml = "- info: { name: Legacy }\n  rule: { type: dns-cname, regex: [] }\n";
    let err = SignatureCatalog::from_yaml_str(yaml, "inline", CatalogOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnsupportedRule { ref name, ref kind } if name == "Legacy" && kind == "dns-cname"
    ));
}

#[test]
fn test_unsupported_rule_allowed_is_inert() {
    let yaml = "- info: { name: Legacy }\n  rule: { type: dns-cname, regex: ['.*'] }\n- info: { name: Real }\n  rule: { type: regex, regex: ['.*'] }\n";
    let options = CatalogOptions {
        allow_unsupported_rules: true,
    };
    let catalog = SignatureCatalog::from_yaml_str(yaml, "inline", options).expect("lenient load");
    assert_eq!(catalog.len(), 2);
    let providers: Vec<String> = catalog
        .scan_value("anything")
        .iter()
        .map(|m| m.provider().to_string())
        .collect();
    assert_eq!(providers, vec!["Real"]);
}

#[test]
fn test_invalid_pattern_fails_load() {
    let yaml = "- info: { name: Broken }\n  rule: { type: regex, regex: ['(?P<token>'] }\n";
    let err = SignatureCatalog::from_yaml_str(yaml, "inline", CatalogOptions::default())
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPattern { .. }));
    assert!(err.to_string().contains("Broken"));
}

#[test]
fn test_empty_catalog_is_an_error() {
    let err = SignatureCatalog::from_yaml_str("[]", "inline", CatalogOptions::default())
        .unwrap_err();
    assert!(matches!(err, CatalogError::Empty(_)));
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let err = SignatureCatalog::from_yaml_str("info: [", "broken.yml", CatalogOptions::default())
        .unwrap_err();
    assert!(matches!(err, CatalogError::Parse { ref origin, .. } if origin == "broken.yml"));
}

#[tokio::test]
async fn test_load_from_path_file_not_found() {
    let path = std::path::Path::new("nonexistent_signatures.yml");
    let err = SignatureCatalog::load_from_path(path, CatalogOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[tokio::test]
async fn test_load_from_path_single_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file_path = temp_dir.path().join("apple.yml");
    tokio::fs::write(
        &file_path,
        "info:\n  name: Apple\n  category: Identity\n  author: me\nrule:\n  type: regex\n  regex:\n    - 'apple-domain-verification=(?P<token>\\S+)'\n",
    )
    .await
    .expect("Failed to write template");

    let catalog = SignatureCatalog::load_from_path(&file_path, CatalogOptions::default())
        .await
        .expect("catalog loads");
    assert_eq!(catalog.len(), 1);
    let matches = catalog.scan_value("apple-domain-verification=abc");
    assert_eq!(matches[0].token, "abc");
    assert_eq!(matches[0].signature.author(), "me");
}

#[tokio::test]
async fn test_load_from_path_directory_is_sorted_and_filtered() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dir_path = temp_dir.path();

    tokio::fs::write(
        dir_path.join("b_second.yml"),
        "info: { name: Second }\nrule: { type: regex, regex: [x] }\n",
    )
    .await
    .expect("Failed to write b_second.yml");
    tokio::fs::write(
        dir_path.join("a_first.yaml"),
        "info: { name: First }\nrule: { type: regex, regex: [x] }\n",
    )
    .await
    .expect("Failed to write a_first.yaml");
    tokio::fs::write(dir_path.join("readme.txt"), "Not a template")
        .await
        .expect("Failed to write readme.txt");

    let catalog = SignatureCatalog::load_from_path(dir_path, CatalogOptions::default())
        .await
        .expect("catalog loads");
    let names: Vec<&str> = catalog.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_load_from_path_directory_with_invalid_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dir_path = temp_dir.path();
    tokio::fs::write(
        dir_path.join("valid.yml"),
        "info: { name: Valid }\nrule: { type: regex, regex: [x] }\n",
    )
    .await
    .expect("Failed to write valid.yml");
    tokio::fs::write(dir_path.join("invalid.yml"), "info: [")
        .await
        .expect("Failed to write invalid.yml");

    let result = SignatureCatalog::load_from_path(dir_path, CatalogOptions::default()).await;
    assert!(matches!(result, Err(CatalogError::Parse { .. })));
}

#[tokio::test]
async fn test_load_from_empty_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let result = SignatureCatalog::load_from_path(temp_dir.path(), CatalogOptions::default()).await;
    assert!(matches!(result, Err(CatalogError::Empty(_))));
}
