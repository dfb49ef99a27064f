// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tests for text and JSON report rendering
//!
//! This module tests:
//! - Golden text reports for captured logs
//! - Error and failure list truncation
//! - JSON output completeness and round-tripping


use similar_asserts::assert_eq;
use testdigest::report::{MAX_ERRORS, MAX_FAILURES, render_json, render_text};
use testdigest_parser::{Counts, ParseResult, Runner, Status};
use test_utils::{golden_report, log_fixture};

fn result_with(errors: usize, failures: usize) -> ParseResult {
    ParseResult {
        status: Status::Failed,
        counts: Counts {
            tests: 20,
            passed: 20 - failures as i64,
            failed: failures as i64,
            ..Default::default()
        },
        duration: None,
        errors: (1..=errors).map(|i| format!("Main.java:{i}: error: e{i}")).collect(),
        failures: (1..=failures)
            .map(|i| format!("T{i} > case() FAILED\n    at T{i}.java:{i}"))
            .collect(),
    }
}

// ============================================================================
// Golden reports
// ============================================================================

#[test]
fn test_gradle_failed_report() {
    let result = Runner::Gradle.parse(&log_fixture("gradle-failed.txt"));
    assert_eq!(render_text(&result), golden_report("gradle-failed.report.txt"));
}

#[test]
fn test_vitest_failed_report() {
    let result = Runner::Vitest.parse(&log_fixture("vitest-failed.txt"));
    assert_eq!(render_text(&result), golden_report("vitest-failed.report.txt"));
}

#[test]
fn test_report_has_no_escape_sequences() {
    let result = Runner::Vitest.parse(&log_fixture("vitest-failed.txt"));
    assert!(!render_text(&result).contains('\x1b'));
}

// ============================================================================
// Truncation
// ============================================================================

#[test]
fn test_errors_are_not_truncated_at_limit() {
    let text = render_text(&result_with(MAX_ERRORS, 0));
    assert!(text.contains(&format!("ERRORS ({MAX_ERRORS} total):")));
    assert!(text.contains("  Main.java:10: error: e10"));
    assert!(!text.contains("more error"));
}

#[test]
fn test_errors_truncated_singular() {
    let text = render_text(&result_with(11, 0));
    assert!(text.contains("ERRORS (11 total):"));
    assert!(!text.contains("e11"));
    assert!(text.contains("\n  ... and 1 more error\n"));
}

#[test]
fn test_errors_truncated_plural() {
    let text = render_text(&result_with(25, 0));
    assert!(text.contains("\n  ... and 15 more errors\n"));
    assert_eq!(text.matches(": error: ").count(), MAX_ERRORS);
}

#[test]
fn test_failures_are_not_truncated_at_limit() {
    let text = render_text(&result_with(0, MAX_FAILURES));
    assert!(text.contains("--- Failure 5 ---\nT5 > case() FAILED\n    at T5.java:5"));
    assert!(!text.contains("more failure"));
    assert!(!text.contains("ERRORS"));
}

#[test]
fn test_failures_truncated_singular() {
    let text = render_text(&result_with(0, 6));
    assert!(text.contains("FAILURES (6 total):"));
    assert!(!text.contains("--- Failure 6 ---"));
    assert!(text.contains("\n\n... and 1 more failure\n"));
}

#[test]
fn test_failures_truncated_plural() {
    let text = render_text(&result_with(0, 9));
    assert!(text.contains("\n\n... and 4 more failures\n"));
    assert_eq!(text.matches("--- Failure ").count(), MAX_FAILURES);
}

#[test]
fn test_sections_in_order() {
    let text = render_text(&result_with(2, 2));
    let stats = text.find("Statistics:").expect("statistics");
    let errors = text.find("ERRORS (2 total):").expect("errors");
    let failures = text.find("FAILURES (2 total):").expect("failures");
    assert!(stats < errors && errors < failures);
    assert!(text.ends_with(&format!("\n\n{}", "=".repeat(60))));
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_is_not_truncated() {
    let result = result_with(25, 9);
    let value: serde_json::Value =
        serde_json::from_str(&render_json(&result).expect("render")).expect("valid JSON");
    assert_eq!(value["errors"].as_array().map(Vec::len), Some(25));
    assert_eq!(value["failures"].as_array().map(Vec::len), Some(9));
    assert_eq!(value["status"], "FAILED");
    assert_eq!(value["passed"], 11);
}

#[test]
fn test_json_round_trips() {
    for (runner, name) in [
        (Runner::Gradle, "gradle-failed.txt"),
        (Runner::Vitest, "vitest-failed.txt"),
        (Runner::Vitest, "vitest-typecheck.txt"),
    ] {
        let result = runner.parse(&log_fixture(name));
        let json = render_json(&result).expect("render");
        let back: ParseResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, result, "round trip of {name}");
    }
}

#[test]
fn test_json_is_indented() {
    let json = render_json(&result_with(0, 0)).expect("render");
    assert!(json.starts_with("{\n  \"status\": \"FAILED\",\n  \"tests\": 20,"));
}
