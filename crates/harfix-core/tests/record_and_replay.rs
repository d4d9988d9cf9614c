//! Integration test: record exchanges into a scenario file, reload it, and
//! match live requests against it the way the mock server replays fixtures.

use harfix_core::config::HarfixConfig;
use harfix_core::har::{self, HarRequest, ScenarioSet};
use harfix_core::{Canonicalizer, HarfixError, RawRequest, RawResponse};
use tempfile::tempdir;

fn list_users_request(query: &str) -> RawRequest {
    RawRequest::new("get", format!("/api/v1/users?{query}"))
        .with_header("authorization", "SSWS token-that-must-not-leak")
        .unwrap()
        .with_header("accept", "application/json")
        .unwrap()
}

fn users_response() -> RawResponse {
    RawResponse::new(200, "OK")
        .with_header("content-type", "application/json")
        .unwrap()
        .with_header(
            "link",
            "<https://test.example.com/api/v1/users?after=00u2&limit=1>; rel=\"next\"",
        )
        .unwrap()
}

#[test]
fn recorded_scenario_replays_regardless_of_query_order() {
    let cfg = HarfixConfig::default();
    let canon = Canonicalizer::from_config(&cfg).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("list-users.har");

    // Record: start from the default document, append, write.
    let mut doc = har::read_har_file(&path, &cfg.creator()).unwrap();
    assert!(doc.entries().is_empty());
    let entry = canon
        .build_entry(
            r#"[{"id":"00u1"}]"#,
            list_users_request("limit=1&filter=status+eq+%22ACTIVE%22"),
            &users_response(),
        )
        .unwrap();
    doc.push_entry(entry);
    har::write_har_file(&path, &doc).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("token-that-must-not-leak"));

    // Replay: strict load, then match a request sent with the keys swapped.
    let (name, entries) = har::load_har_from_file(&path).unwrap();
    assert_eq!(name, "list-users");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].response.headers.len(), 2);

    let live = HarRequest {
        method: "GET".to_string(),
        url: "/api/v1/users?filter=status%20eq%20%22ACTIVE%22&limit=1".to_string(),
        headers: vec![],
        query_string: vec![],
        post_data: Default::default(),
        extra: Default::default(),
    };
    let set = ScenarioSet::load_dir(dir.path()).unwrap();
    let found = set
        .find_entry(&canon, "list-users", &live)
        .unwrap()
        .expect("recorded entry should match");
    assert_eq!(found.response.content.text, r#"[{"id":"00u1"}]"#);

    let other = HarRequest {
        url: "/api/v1/users?limit=2".to_string(),
        ..live.clone()
    };
    assert!(set.find_entry(&canon, "list-users", &other).unwrap().is_none());
    assert!(set.find_entry(&canon, "unknown", &live).unwrap().is_none());
}

#[test]
fn appending_to_existing_scenario_keeps_previous_entries() {
    let cfg = HarfixConfig::default();
    let canon = Canonicalizer::from_config(&cfg).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("paging.har");

    for query in ["limit=1", "after=00u1&limit=1"] {
        let mut doc = har::read_har_file(&path, &cfg.creator()).unwrap();
        let entry = canon
            .build_entry("[]", list_users_request(query), &users_response())
            .unwrap();
        doc.push_entry(entry);
        har::write_har_file(&path, &doc).unwrap();
    }

    let (_, entries) = har::load_har_from_file(&path).unwrap();
    let urls: Vec<&str> = entries.iter().map(|e| e.request.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "https://test.example.com/api/v1/users?limit=1",
            "https://test.example.com/api/v1/users?after=00u1&limit=1",
        ]
    );
}

#[test]
fn missing_fixture_is_only_fatal_for_replay() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never-recorded.har");
    let creator = HarfixConfig::default().creator();

    assert!(har::read_har_file(&path, &creator).is_ok());
    match har::load_har_from_file(&path) {
        Err(HarfixError::NotFound { path: missing }) => assert_eq!(missing, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
