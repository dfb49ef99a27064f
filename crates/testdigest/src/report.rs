// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report rendering
//!
//! The text report is plain ASCII framing (no colors, no emoji) around the
//! log excerpts, with the error and failure lists truncated. The JSON report
//! is the full [`ParseResult`].

use testdigest_parser::{ParseResult, Status};
use thiserror::Error;

/// Width of the `=` banner lines
pub const BANNER_WIDTH: usize = 60;

/// Maximum number of errors listed in the text report
pub const MAX_ERRORS: usize = 10;

/// Maximum number of failures listed in the text report
pub const MAX_FAILURES: usize = 5;

/// How a result is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Report rendering errors
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `result` in the given mode
///
/// # Errors
///
/// Returns `ReportError::Json` if JSON serialization fails.
pub fn render(result: &ParseResult, mode: OutputMode) -> Result<String, ReportError> {
    match mode {
        OutputMode::Text => Ok(render_text(result)),
        OutputMode::Json => render_json(result),
    }
}

/// Render the full result as indented JSON
///
/// # Errors
///
/// Returns `ReportError::Json` if serialization fails.
pub fn render_json(result: &ParseResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render the human-readable report
#[must_use]
pub fn render_text(result: &ParseResult) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let counts = &result.counts;
    let verdict = if result.status == Status::Passed {
        "PASS"
    } else {
        "FAIL"
    };

    let mut out = vec![
        format!("\n{banner}"),
        format!("TEST RESULTS: {verdict} {}", result.status),
        banner.clone(),
        "\nStatistics:".to_string(),
    ];

    if let Some(suites) = counts.suites.filter(|&n| n > 0) {
        out.push(format!("  Test Suites: {suites}"));
    }
    out.push(format!("  Tests:   {}", counts.tests));
    out.push(format!("  Passed:  {}", counts.passed));
    out.push(format!("  Failed:  {}", counts.failed));
    if counts.skipped > 0 {
        out.push(format!("  Skipped: {}", counts.skipped));
    }
    if let Some(duration) = result.duration() {
        out.push(format!("  Duration: {duration}"));
    }

    if !result.errors.is_empty() {
        out.push(format!("\n{banner}"));
        out.push(format!("ERRORS ({} total):", result.errors.len()));
        out.push(banner.clone());
        for error in result.errors.iter().take(MAX_ERRORS) {
            out.push(format!("  {error}"));
        }
        if result.errors.len() > MAX_ERRORS {
            let rest = result.errors.len() - MAX_ERRORS;
            out.push(format!("  ... and {}", more(rest, "error")));
        }
    }

    if !result.failures.is_empty() {
        out.push(format!("\n{banner}"));
        out.push(format!("FAILURES ({} total):", result.failures.len()));
        out.push(banner.clone());
        for (i, failure) in result.failures.iter().take(MAX_FAILURES).enumerate() {
            out.push(format!("\n--- Failure {} ---", i + 1));
            out.push(failure.clone());
        }
        if result.failures.len() > MAX_FAILURES {
            let rest = result.failures.len() - MAX_FAILURES;
            out.push(format!("\n... and {}", more(rest, "failure")));
        }
    }

    out.push(format!("\n{banner}"));
    out.join("\n")
}

/// `1 more error`, `3 more errors`
fn more(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 more {noun}")
    } else {
        format!("{n} more {noun}s")
    }
}
