// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Vitest console output scanning
//!
//! Vitest reports failing files with ` FAIL  src/foo.test.ts > suite > case`,
//! marks individual tests with `✓` / `×`, and ends with a summary block:
//!
//! ```text
//!  Test Files  1 failed | 3 passed (4)
//!       Tests  2 failed | 63 passed (65)
//!    Duration  1.52s (transform 120ms, setup 0ms)
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::block::FailureBlock;
use crate::result::{Counts, ParseResult, Status};
use crate::sanitize::strip_ansi;
use crate::{capture_count, split_lines};

/// Maximum number of lines kept per failure block
pub const MAX_FAILURE_LINES: usize = 20;

/// A blank line only ends a block once it holds more than this many lines
const MIN_LINES_BEFORE_BLANK_END: usize = 3;

lazy_static! {
    static ref PASSED_COUNT: Regex = Regex::new(r"(\d+)\s+passed").expect("valid pattern");
    static ref FAILED_COUNT: Regex = Regex::new(r"(\d+)\s+failed").expect("valid pattern");
    static ref SKIPPED_COUNT: Regex = Regex::new(r"(\d+)\s+skipped").expect("valid pattern");
    static ref DURATION: Regex = Regex::new(r"Duration\s+(.+)").expect("valid pattern");
}

/// Scan Vitest output into a [`ParseResult`]
///
/// Escape sequences are stripped first. `tests` is recomputed from the
/// parsed `passed`, `failed` and `skipped` values of each `Tests` summary
/// line. When no `Test Files ... failed` line sets the status, it is derived
/// from the failed count.
#[must_use]
pub fn parse_vitest_output(content: &str) -> ParseResult {
    let content = strip_ansi(content);

    let mut result = ParseResult {
        counts: Counts {
            suites: Some(0),
            ..Default::default()
        },
        duration: Some(String::new()),
        ..Default::default()
    };
    let mut block = FailureBlock::new(MAX_FAILURE_LINES);

    for line in split_lines(&content) {
        let trimmed = line.trim();

        if line.contains("Test Files") {
            if let Some(n) = capture_count(&PASSED_COUNT, line) {
                result.counts.suites = Some(n);
            }
            if FAILED_COUNT.is_match(line) {
                result.status = Status::Failed;
            }
        }

        if trimmed.starts_with("Tests") && line.contains("passed") {
            scan_test_counts(line, &mut result.counts);
        }

        if line.contains("Duration") {
            if let Some(caps) = DURATION.captures(line) {
                result.duration = Some(caps[1].trim().to_string());
            }
        }

        if trimmed.starts_with("FAIL") || line.contains("× ") {
            debug!(line, "vitest failure block started");
            block.open(line);
        } else if block.is_open() {
            let blank_end = trimmed.is_empty() && block.len() > MIN_LINES_BEFORE_BLANK_END;
            if blank_end || line.contains('✓') || trimmed.starts_with("Test Files") {
                result.failures.extend(block.flush());
            } else {
                block.push(line);
            }
        }

        if line.contains("error TS") {
            result.errors.push(trimmed.to_string());
        }
    }
    block.finish();

    if result.status == Status::Unknown {
        result.status = if result.counts.failed > 0 {
            Status::Failed
        } else {
            Status::Passed
        };
    }

    debug!(
        status = %result.status,
        tests = result.counts.tests,
        failures = result.failures.len(),
        errors = result.errors.len(),
        "vitest scan complete"
    );
    result
}

/// `Tests  2 failed | 63 passed | 1 skipped (66)`
fn scan_test_counts(line: &str, counts: &mut Counts) {
    if let Some(n) = capture_count(&PASSED_COUNT, line) {
        counts.passed = n;
    }
    if let Some(n) = capture_count(&FAILED_COUNT, line) {
        counts.failed = n;
    }
    if let Some(n) = capture_count(&SKIPPED_COUNT, line) {
        counts.skipped = n;
    }
    counts.tests = counts
        .passed
        .saturating_add(counts.failed)
        .saturating_add(counts.skipped);
}
