// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Runner selection and auto-detection

use std::fmt;

use tracing::debug;

use crate::gradle::parse_gradle_output;
use crate::result::ParseResult;
use crate::vitest::parse_vitest_output;

/// The test runner whose console output is being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runner {
    /// Gradle (`BUILD SUCCESSFUL` / `FAILED >` markers)
    Gradle,
    /// Vitest (`Test Files`, `Tests`, `FAIL`, `✓` / `×` markers)
    Vitest,
}

impl Runner {
    /// Guess the runner from raw (unsanitized) content
    ///
    /// Anything mentioning `vite` in any case (the `Vitest` version banner,
    /// `vite.config.ts`, `vite-node` frames) is treated as Vitest output;
    /// everything else falls back to Gradle.
    #[must_use]
    pub fn detect(content: &str) -> Self {
        let runner = if content.to_lowercase().contains("vite") {
            Runner::Vitest
        } else {
            Runner::Gradle
        };
        debug!(runner = %runner, "detected runner from content");
        runner
    }

    /// Scan `content` with this runner's scanner
    #[must_use]
    pub fn parse(self, content: &str) -> ParseResult {
        match self {
            Runner::Gradle => parse_gradle_output(content),
            Runner::Vitest => parse_vitest_output(content),
        }
    }

    /// Lower-case runner name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Runner::Gradle => "gradle",
            Runner::Vitest => "vitest",
        }
    }
}

impl fmt::Display for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
