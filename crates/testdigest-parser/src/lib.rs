// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testdigest-parser: console log scanning for testdigest
//!
//! This library crate turns the raw console output of a Gradle or Vitest test
//! run into a [`ParseResult`]: summary counts, compiler/type errors, and
//! excerpts of each failing test.
//!
//! # Example
//!
//! ```
//! use testdigest_parser::{Runner, Status};
//!
//! let log = "10 tests completed, 2 failed, 1 skipped\nBUILD FAILED in 3s\n";
//! let runner = Runner::detect(log);
//! let result = runner.parse(log);
//!
//! assert_eq!(runner, Runner::Gradle);
//! assert_eq!(result.status, Status::Failed);
//! assert_eq!(result.counts.passed, 7);
//! ```

#![warn(missing_docs)]

use lazy_static::lazy_static;
use regex::Regex;

mod block;

pub mod gradle;
pub mod result;
pub mod runner;
pub mod sanitize;
pub mod vitest;

pub use gradle::parse_gradle_output;
pub use result::{Counts, ParseResult, Status};
pub use runner::Runner;
pub use sanitize::strip_ansi;
pub use vitest::parse_vitest_output;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").expect("valid pattern");
}

/// Split sanitized text into lines the way both scanners expect.
///
/// `\r\n`, `\n` and a bare `\r` each end a line. A trailing line break
/// yields a final empty line (which closes an open Gradle block).
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(text)
}

/// Extract the first capture group of `re` in `line` as a count.
///
/// Returns `None` when there is no match or the number does not fit.
pub(crate) fn capture_count(re: &Regex, line: &str) -> Option<i64> {
    let digits = re.captures(line)?.get(1)?.as_str();
    match digits.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(digits, "ignoring count that does not fit in i64");
            None
        }
    }
}
