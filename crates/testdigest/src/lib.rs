// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testdigest library
//!
//! This module exports the command-line pieces of testdigest (configuration,
//! input loading, report rendering) for use in integration tests and as a
//! library.
//!
//! # Example
//!
//! ```
//! use testdigest::digest;
//! use testdigest::report::OutputMode;
//!
//! let report = digest("BUILD SUCCESSFUL in 2s\n", None, OutputMode::Text).unwrap();
//! assert!(report.contains("TEST RESULTS: PASS PASSED"));
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod report;

use testdigest_parser::Runner;
use tracing::info;

use crate::config::Config;
use crate::error::DigestError;
use crate::report::{OutputMode, ReportError};

/// Parse `content` and render the report
///
/// The runner is detected from the content when `runner` is `None`.
///
/// # Errors
///
/// Returns `ReportError` if the report cannot be rendered.
pub fn digest(
    content: &str,
    runner: Option<Runner>,
    mode: OutputMode,
) -> Result<String, ReportError> {
    let runner = runner.unwrap_or_else(|| Runner::detect(content));
    info!(%runner, bytes = content.len(), "parsing test output");

    let result = runner.parse(content);
    report::render(&result, mode)
}

/// Read the input named by `config` and render its report
///
/// # Errors
///
/// Returns `DigestError::Input` if the input cannot be read, or
/// `DigestError::Report` if rendering fails.
pub fn run(config: &Config) -> Result<String, DigestError> {
    let content = input::read_input(config.file.as_deref())?;
    Ok(digest(&content, config.runner(), config.output_mode())?)
}
