//! JSON contract with the UI layer and configuration handling.

use anyhow::Result;
use regex_workbench::{
    EnumerationError, Error, MatchConfig, PatternComplexity, TestOutcome, TestRequest, Workbench,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn run(bench: &Workbench, request: Value) -> Value {
    let out = bench.run_json(&request.to_string());
    serde_json::from_str(&out).expect("outcome is valid JSON")
}

#[test]
fn test_success_shape() {
    init_tracing();
    let out = run(
        &Workbench::new(),
        serde_json::json!({"pattern": r"(?<n>\d)", "test_string": "a1b2", "flags": "g"}),
    );
    assert!(out.get("error").is_none());
    let matches = out["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[1]["index"], 3);
    assert_eq!(matches[1]["groups"][0]["name"], "n");
    assert_eq!(out["summary"]["engine"], "linear");
    assert_eq!(out["summary"]["flags"], "g");
    assert_eq!(out["segments"].as_array().unwrap().len(), 4);
    assert_eq!(out["details"][0]["groups"][0]["label"], "n");
}

#[test]
fn test_error_shape_suppresses_matches() {
    let out = run(
        &Workbench::new(),
        serde_json::json!({"pattern": "(", "test_string": "abc", "flags": "g"}),
    );
    assert!(out["error"].is_string());
    assert!(out.get("matches").is_none());
    assert!(out.get("segments").is_none());
}

#[test]
fn test_missing_flags_default_to_empty() {
    let out = run(
        &Workbench::new(),
        serde_json::json!({"pattern": "a", "test_string": "aaa"}),
    );
    assert_eq!(out["matches"].as_array().unwrap().len(), 1);
}

#[test]
fn test_backtrack_budget_reported_without_partial_results() -> Result<()> {
    init_tracing();
    let bench = Workbench::with_config(MatchConfig::new().with_backtrack_limit(500))?;
    let text = format!("xx {}", "a".repeat(28));
    let err = bench
        .recompute(r"x|(a+)+\1b", "g".parse()?, &text)
        .unwrap_err();
    assert_eq!(
        err,
        Error::Enumeration(EnumerationError::BacktrackLimitExceeded)
    );

    let outcome = bench.run(&TestRequest::new(r"x|(a+)+\1b", text, "g".parse()?));
    assert_eq!(outcome.error(), Some("Matching failed: backtrack limit exceeded"));
    Ok(())
}

#[test]
fn test_sticky_miss_stays_within_budget() -> Result<()> {
    init_tracing();
    let bench = Workbench::with_config(MatchConfig::new().with_backtrack_limit(10_000))?;
    let text = format!("b{}", "a".repeat(28));
    let report = bench.recompute(r"c|(a+)+\1b", "y".parse()?, &text)?;
    assert!(report.matches.is_empty());
    assert_eq!(report.segments.len(), 1);
    assert!(!report.segments[0].is_match);
    Ok(())
}

#[test]
fn test_strict_config_rejects_dangerous_pattern() -> Result<()> {
    let bench = Workbench::with_config(MatchConfig::strict())?;
    let outcome = bench.run(&TestRequest::new("(a+)+$", "aaaa", "".parse()?));
    assert!(matches!(outcome, TestOutcome::Failed { .. }));

    let report = Workbench::new().recompute("(a+)+$", "".parse()?, "aaaa")?;
    assert_eq!(report.summary.complexity, Some(PatternComplexity::Dangerous));
    assert_eq!(report.matches[0].text, "aaaa");
    Ok(())
}

#[test]
fn test_config_loaded_from_json() -> Result<()> {
    let config = MatchConfig::from_json(r#"{"max_matches": 2}"#)?;
    let bench = Workbench::with_config(config)?;
    let err = bench.recompute("a", "g".parse()?, "aaa").unwrap_err();
    assert!(err.is_enumeration());
    assert_eq!(bench.recompute("a", "g".parse()?, "aa")?.matches.len(), 2);
    Ok(())
}

#[test]
fn test_invocations_are_independent() -> Result<()> {
    let bench = Workbench::new();
    let first = bench.recompute("b", "g".parse()?, "abcb")?;
    assert!(bench.recompute("(", "g".parse()?, "abcb").is_err());
    let again = bench.recompute("b", "g".parse()?, "abcb")?;
    assert_eq!(first, again);
    Ok(())
}
