// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for the runner, output and logging flags
//!
//! These tests verify flag parsing, flag interactions, and how the parsed
//! flags resolve to a runner, an output mode and a log level.

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use testdigest::config::Config;
use testdigest::report::OutputMode;
use testdigest_parser::Runner;
use tracing::Level;

// ============================================================================
// Positional input
// ============================================================================

#[test]
fn test_no_arguments_reads_stdin() {
    let config = Config::try_parse_from(["testdigest"]).expect("parse should succeed");
    assert!(config.file.is_none());
    assert_eq!(config.runner(), None);
    assert_eq!(config.output_mode(), OutputMode::Text);
}

#[test]
fn test_positional_file() {
    let config =
        Config::try_parse_from(["testdigest", "build/test.log"]).expect("parse should succeed");
    assert_eq!(config.file, Some(PathBuf::from("build/test.log")));
}

#[test]
fn test_two_positional_files_rejected() {
    let result = Config::try_parse_from(["testdigest", "a.log", "b.log"]);
    assert!(result.is_err(), "only one input file is accepted");
}

// ============================================================================
// Runner flags
// ============================================================================

#[test]
fn test_gradle_flag() {
    let config = Config::try_parse_from(["testdigest", "--gradle"]).expect("parse should succeed");
    assert!(config.gradle);
    assert_eq!(config.runner(), Some(Runner::Gradle));
}

#[test]
fn test_vitest_flag() {
    let config = Config::try_parse_from(["testdigest", "--vitest"]).expect("parse should succeed");
    assert!(config.vitest);
    assert_eq!(config.runner(), Some(Runner::Vitest));
}

#[test]
fn test_gradle_and_vitest_conflict() {
    let err = Config::try_parse_from(["testdigest", "--gradle", "--vitest"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn test_unknown_flag_rejected() {
    let err = Config::try_parse_from(["testdigest", "--jest"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

// ============================================================================
// Output flags
// ============================================================================

#[test]
fn test_json_flag() {
    let config = Config::try_parse_from(["testdigest", "--json", "--vitest", "out.log"])
        .expect("parse should succeed");
    assert!(config.json);
    assert_eq!(config.output_mode(), OutputMode::Json);
    assert_eq!(config.runner(), Some(Runner::Vitest));
    assert_eq!(config.file, Some(PathBuf::from("out.log")));
}

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_short_flag() {
    let config = Config::try_parse_from(["testdigest", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_short_flag() {
    let config = Config::try_parse_from(["testdigest", "-q"]).expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::ERROR);
}

#[test]
fn test_verbose_takes_precedence_over_quiet() {
    let config = Config::try_parse_from(["testdigest", "-q", "-v"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_default_log_level_is_warn() {
    let config = Config::try_parse_from(["testdigest"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_help_and_version() {
    let err = Config::try_parse_from(["testdigest", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    let err = Config::try_parse_from(["testdigest", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}
