// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Parse result types

use serde::{Deserialize, Serialize};

/// Overall outcome of a test run as reported by its log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// No status line was seen
    #[default]
    Unknown,
    /// The run passed
    Passed,
    /// The run failed
    Failed,
}

impl Status {
    /// Upper-case label used in reports and JSON
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Unknown => "UNKNOWN",
            Status::Passed => "PASSED",
            Status::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary counters extracted from a log
///
/// Counters are signed: Gradle's `passed` is derived by subtraction and is
/// reported as-is when the log is inconsistent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Number of passing test files (Vitest only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suites: Option<i64>,
    /// Total tests
    pub tests: i64,
    /// Tests passed
    pub passed: i64,
    /// Tests failed
    pub failed: i64,
    /// Tests skipped
    pub skipped: i64,
}

/// Everything extracted from one test log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Overall status
    pub status: Status,
    /// Summary counters
    #[serde(flatten)]
    pub counts: Counts,
    /// Wall-clock duration as printed by the runner (Vitest only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Failure excerpts, one multi-line block per failing test
    pub failures: Vec<String>,
    /// Single-line compiler or type-checker errors
    pub errors: Vec<String>,
}

impl ParseResult {
    /// Check if the log reported a passing run
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.status == Status::Passed
    }

    /// Check if nothing at all was recognized in the log
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Duration string, if one was printed and it is not blank
    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref().filter(|d| !d.is_empty())
    }
}
