// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command-line configuration for testdigest
//!
//! This module provides the clap-derived [`Config`] and the helpers that turn
//! its flags into a runner choice, an output mode, and a log level.

use std::path::PathBuf;

use clap::Parser;
use testdigest_parser::Runner;

use crate::report::OutputMode;

/// Summarize Gradle or Vitest test output
///
/// Reads a captured test log (or stdin), extracts the pass/fail counts,
/// compiler errors and failing test excerpts, and prints a short report.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "testdigest")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Test log to parse (defaults to stdin)
    pub file: Option<PathBuf>,

    /// Parse the input as Gradle output
    #[arg(long, conflicts_with = "vitest")]
    pub gradle: bool,

    /// Parse the input as Vitest output
    #[arg(long)]
    pub vitest: bool,

    /// Print the full result as JSON instead of the text report
    ///
    /// Can also be enabled with `TESTDIGEST_JSON`. `0`, `false`, `no`, `off`
    /// and an empty value leave it disabled; anything else enables it.
    #[arg(
        long,
        env = "TESTDIGEST_JSON",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub json: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only log errors
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// The runner forced on the command line, if any
    ///
    /// `None` means the runner is detected from the input content.
    #[must_use]
    pub fn runner(&self) -> Option<Runner> {
        if self.vitest {
            Some(Runner::Vitest)
        } else if self.gradle {
            Some(Runner::Gradle)
        } else {
            None
        }
    }

    /// The selected output mode
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an input file is given but does not exist or is
    /// not a regular file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref file) = self.file {
            if !file.exists() {
                return Err(ConfigError::InputNotFound(file.clone()));
            }
            if file.is_dir() {
                return Err(ConfigError::InputIsDirectory(file.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    ///
    /// Defaults to WARN so that a normal run prints nothing but the report.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input file not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is a directory
    #[error("Input path is a directory: {0}")]
    InputIsDirectory(PathBuf),
}
