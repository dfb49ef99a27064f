// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for testdigest

use thiserror::Error;

use crate::input::InputError;
use crate::report::ReportError;

/// Errors that can occur while producing a digest
#[derive(Debug, Error)]
pub enum DigestError {
    /// The test log could not be read
    #[error(transparent)]
    Input(#[from] InputError),

    /// The report could not be rendered
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}
