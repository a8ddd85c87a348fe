//! DNS module tests.

use super::records::classify_error;
use super::*;
use crate::error_handling::DnsError;
use std::time::Duration;

#[test]
fn test_is_spf_record() {
    assert!(is_spf_record("v=spf1 include:_spf.google.com ~all"));
    assert!(is_spf_record("v=spf1 -all"));
    assert!(!is_spf_record("google-site-verification=abc"));
    // The marker is a literal prefix
    assert!(!is_spf_record(" v=spf1 -all"));
    assert!(!is_spf_record("V=SPF1 -all"));
}

#[test]
fn test_extract_spf_includes_in_order() {
    let includes = extract_spf_includes(
        "v=spf1 include:_spf.example.com ip4:192.0.2.0/24 include:thirdparty.com ~all",
    );
    assert_eq!(includes, vec!["_spf.example.com", "thirdparty.com"]);
}

#[test]
fn test_extract_spf_includes_qualifiers_and_case() {
    let includes = extract_spf_includes(
        "v=spf1 +include:a.example.com ?INCLUDE:B.Example.com -include:c.example.com. ~all",
    );
    assert_eq!(
        includes,
        vec!["a.example.com", "b.example.com", "c.example.com"]
    );
}

#[test]
fn test_extract_spf_includes_ignores_other_mechanisms() {
    let includes = extract_spf_includes(
        "v=spf1 a:mail.example.com mx:mx.example.com exists:%{i}.example.com redirect=_spf.example.com -all",
    );
    assert!(includes.is_empty());
}

#[test]
fn test_extract_spf_includes_skips_macros_and_empty_targets() {
    let includes = extract_spf_includes("v=spf1 include:%{d}.spf.example.com include: -all");
    assert!(includes.is_empty());
}

#[test]
fn test_classify_error() {
    assert_eq!(
        classify_error("no records found for Query { name: example.com, query_type: TXT }"),
        DnsError::NoAnswer
    );
    assert_eq!(classify_error("NXDomain response"), DnsError::NoAnswer);
    assert_eq!(classify_error("request timed out"), DnsError::Timeout);
    assert_eq!(
        classify_error("io error: connection refused"),
        DnsError::Other("io error: connection refused".to_string())
    );
}

#[tokio::test]
async fn test_mock_resolver_answers_and_records_queries() {
    let resolver = MockResolver::new()
        .with_txt("example.com", &["a", "b"])
        .with_error("broken.example.com", DnsError::Other("SERVFAIL".into()));

    assert_eq!(
        resolver.resolve_txt("Example.COM.").await,
        Ok(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(
        resolver.resolve_txt("broken.example.com").await,
        Err(DnsError::Other("SERVFAIL".into()))
    );
    assert_eq!(
        resolver.resolve_txt("unknown.example.com").await,
        Err(DnsError::NoAnswer)
    );
    assert_eq!(
        resolver.queries(),
        vec!["example.com", "broken.example.com", "unknown.example.com"]
    );
    assert_eq!(resolver.query_count("example.com"), 1);
}

#[tokio::test]
async fn test_mock_resolver_clones_share_state() {
    let resolver = MockResolver::new().with_txt("example.com", &["a"]);
    let clone = resolver.clone();
    let _ = clone.resolve_txt("example.com").await;
    assert_eq!(resolver.query_count("example.com"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_mock_resolver_delay() {
    let resolver = MockResolver::new()
        .with_txt("slow.example.com", &["a"])
        .with_delay("slow.example.com", Duration::from_secs(10));

    let start = tokio::time::Instant::now();
    let result = resolver.resolve_txt("slow.example.com").await;
    assert!(result.is_ok());
    assert!(start.elapsed() >= Duration::from_secs(10));
}
