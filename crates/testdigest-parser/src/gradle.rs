// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Gradle console output scanning
//!
//! Gradle prints one line per failing test (`FooTest > bar() FAILED`)
//! followed by indented exception details, a summary such as
//! `10 tests completed, 2 failed, 1 skipped`, and finally
//! `BUILD SUCCESSFUL` or `BUILD FAILED`.
//!
//! # Example
//!
//! ```
//! use testdigest_parser::{Status, parse_gradle_output};
//!
//! let log = "\
//! CalcTest > divides() FAILED
//!     java.lang.ArithmeticException at CalcTest.java:12
//!
//! 3 tests completed, 1 failed
//! BUILD FAILED in 2s
//! ";
//! let result = parse_gradle_output(log);
//! assert_eq!(result.status, Status::Failed);
//! assert_eq!(result.counts.passed, 2);
//! assert_eq!(result.failures.len(), 1);
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::block::FailureBlock;
use crate::result::{Counts, ParseResult, Status};
use crate::sanitize::strip_ansi;
use crate::{capture_count, split_lines};

/// Maximum number of lines kept per failure block
pub const MAX_FAILURE_LINES: usize = 15;

lazy_static! {
    static ref TESTS_COMPLETED: Regex =
        Regex::new(r"(?i)(\d+)\s+tests?\s+completed").expect("valid pattern");
    static ref FAILED_COUNT: Regex = Regex::new(r"(?i)(\d+)\s+failed").expect("valid pattern");
    static ref SKIPPED_COUNT: Regex = Regex::new(r"(?i)(\d+)\s+skipped").expect("valid pattern");
}

/// Scan Gradle output into a [`ParseResult`]
///
/// Escape sequences are stripped first. `passed` is derived as
/// `tests - failed - skipped` and is not clamped, so inconsistent logs can
/// produce a negative value. A failure block still open at the end of the
/// input is dropped.
#[must_use]
pub fn parse_gradle_output(content: &str) -> ParseResult {
    let content = strip_ansi(content);

    let mut result = ParseResult::default();
    let mut block = FailureBlock::new(MAX_FAILURE_LINES);

    for line in split_lines(&content) {
        if line.contains("BUILD SUCCESSFUL") {
            result.status = Status::Passed;
        } else if line.contains("BUILD FAILED") {
            result.status = Status::Failed;
        }

        scan_counts(line, &mut result.counts);

        if is_block_start(line) {
            if let Some(failure) = block.flush() {
                result.failures.push(failure);
            }
            debug!(line, "gradle failure block started");
            block.open(line);
        } else if block.is_open() {
            if is_block_end(line) {
                result.failures.extend(block.flush());
            } else {
                block.push(line);
            }
        }

        if is_error_line(line) {
            result.errors.push(line.trim().to_string());
        }
    }
    block.finish();

    let counts = &mut result.counts;
    counts.passed = counts
        .tests
        .saturating_sub(counts.failed)
        .saturating_sub(counts.skipped);

    debug!(
        status = %result.status,
        tests = counts.tests,
        failures = result.failures.len(),
        errors = result.errors.len(),
        "gradle scan complete"
    );
    result
}

fn scan_counts(line: &str, counts: &mut Counts) {
    if let Some(n) = capture_count(&TESTS_COMPLETED, line) {
        counts.tests = n;
    }
    if let Some(n) = capture_count(&FAILED_COUNT, line) {
        counts.failed = n;
    }
    if let Some(n) = capture_count(&SKIPPED_COUNT, line) {
        counts.skipped = n;
    }
}

/// `SomeTest > method() FAILED`
fn is_block_start(line: &str) -> bool {
    line.contains("FAILED") && line.contains('>')
}

fn is_block_end(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('>') || line.contains("BUILD")
}

/// `e: file.kt: error: ...` style compiler diagnostics
fn is_error_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains(": error:") || lower.contains("error: ")
}
