// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testdigest: summarize Gradle and Vitest test logs
//!
//! ```text
//! ./gradlew test 2>&1 | testdigest --gradle
//! npx vitest run 2>&1 | testdigest --vitest --json
//! ```
//!
//! The exit status reflects whether the log could be read and summarized,
//! not whether the tests passed.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use testdigest::config::Config;
use testdigest::error::DigestError;
use tracing::{debug, error};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    debug!(?config, "starting testdigest");

    if let Err(e) = config.validate() {
        Config::command().error(ErrorKind::Io, e).exit();
    }

    let output = match testdigest::run(&config) {
        Ok(output) => output,
        Err(DigestError::Input(e)) => Config::command().error(ErrorKind::Io, e).exit(),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    match writeln!(stdout, "{output}").and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!("failed to write report: {e}");
            ExitCode::FAILURE
        }
    }
}
