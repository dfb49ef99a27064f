// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reading test logs from a file or stdin
//!
//! Logs are read whole and decoded as UTF-8 with lossy replacement, so
//! undecodable bytes become `U+FFFD` instead of an error.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading a test log
#[derive(Debug, Error)]
pub enum InputError {
    /// Error reading the input file
    #[error("Failed to read {path}: {source}")]
    File {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying IO error
        source: io::Error,
    },

    /// Error reading stdin
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Read the whole log from `path`, or from stdin when `path` is `None`
///
/// # Errors
///
/// Returns `InputError` if the file or stdin cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) => {
            let bytes = std::fs::read(path).map_err(|source| InputError::File {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), bytes = bytes.len(), "read input file");
            Ok(decode_lossy(bytes))
        }
        None => read_from(io::stdin().lock()).map_err(InputError::Stdin),
    }
}

/// Read everything from `reader` and decode it lossily
///
/// # Errors
///
/// Returns the underlying IO error if reading fails.
pub fn read_from<R: Read>(mut reader: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    debug!(bytes = bytes.len(), "read input stream");
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
