//! Loader + engine integration: filter and enrichment passes over a batch.

use std::fs;

use chrono::{Duration, Utc};
use tempfile::TempDir;

use tracelens_core::LogRecord;
use tracelens_rules::{engine, loader, Purpose};

const FILTER_RULES: &str = r#"
{
  "sections": [
    {
      "name": "noise",
      "purpose": "filter",
      "rules": [
        { "name": "drop heartbeats", "match": "heartbeat",
          "action": { "type": "exclude" } },
        { "name": "keep failed heartbeats", "match": "heartbeat failed",
          "action": { "type": "include" } }
      ]
    }
  ]
}
"#;

const ENRICH_RULES: &str = r#"
{
  "sections": [
    {
      "name": "triage",
      "purpose": "enrichment",
      "rules": [
        { "name": "tag errors", "field": "level", "match": "error",
          "action": { "type": "tag", "value": "needs-triage" } },
        { "name": "route security", "match": "logon|logoff",
          "action": { "type": "route", "processor": "security" } },
        { "name": "stale rule", "match": "anything", "enabled": false,
          "action": { "type": "tag", "value": "never" } }
      ]
    }
  ]
}
"#;

fn record(level: &str, text: &str) -> LogRecord {
    let mut rec = LogRecord::from_message(Utc::now() - Duration::minutes(5), text);
    rec.level = level.to_string();
    rec
}

#[test]
fn filter_pass_over_batch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filters.rules.json");
    fs::write(&path, FILTER_RULES).unwrap();
    let set = loader::load(&[path]).unwrap();

    let sections = set.sections_by_purpose(&Purpose::Filter);
    assert_eq!(sections.len(), 1);
    let section = sections[0];

    let records = vec![
        record("Information", "heartbeat ok"),
        record("Error", "heartbeat failed on node 3"),
        record("Information", "user logon"),
    ];
    let verdicts = engine::evaluate_all(&records, section);

    assert!(!verdicts[0].is_included(), "plain heartbeat dropped");
    assert!(
        verdicts[1].is_included(),
        "later include rule wins over the exclude"
    );
    assert!(verdicts[2].is_included(), "untouched record kept by default");
}

#[test]
fn enrichment_pass_tags_and_routes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("enrich.rules.json");
    fs::write(&path, ENRICH_RULES).unwrap();
    let set = loader::load(&[path]).unwrap();

    let section = set.sections_by_purpose(&Purpose::Enrichment)[0];

    let verdict = engine::evaluate(&record("Error", "user logon from 10.0.0.9"), section);
    assert!(verdict.is_included());
    assert_eq!(verdict.tags, vec!["needs-triage"]);
    assert_eq!(verdict.route_to, vec!["security"]);

    let verdict = engine::evaluate(&record("Information", "cache rebuilt"), section);
    assert!(verdict.tags.is_empty());
    assert!(verdict.route_to.is_empty());
}

#[test]
fn merged_files_keep_both_purposes() {
    let dir = TempDir::new().unwrap();
    let filter_path = dir.path().join("a.rules.json");
    let enrich_path = dir.path().join("b.rules.json");
    fs::write(&filter_path, FILTER_RULES).unwrap();
    fs::write(&enrich_path, ENRICH_RULES).unwrap();

    let discovered = loader::discover(dir.path()).unwrap();
    assert_eq!(discovered.len(), 2);

    let set = loader::load(&discovered).unwrap();
    assert_eq!(set.sections.len(), 2);
    assert_eq!(set.sections_by_purpose(&Purpose::Filter).len(), 1);
    assert_eq!(set.sections_by_purpose(&Purpose::Enrichment).len(), 1);
    assert!(set.sections_by_purpose(&Purpose::Uml).is_empty());
}
