// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Terminal escape sequence removal

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Two-character `ESC x` sequences and full CSI sequences (`ESC [ params letter`)
    static ref ANSI_ESCAPE: Regex =
        Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("ANSI escape pattern is valid");
}

/// Remove ANSI/VT100 escape sequences from `text`
///
/// Everything that is not part of an escape sequence is left untouched. The
/// input is borrowed when it contains no escape sequences.
///
/// Removal repeats until no sequence is left, so stripping is idempotent
/// even when a lone `ESC` ends up in front of a bracket sequence.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    let mut stripped = match ANSI_ESCAPE.replace_all(text, "") {
        Cow::Borrowed(unchanged) => return Cow::Borrowed(unchanged),
        Cow::Owned(stripped) => stripped,
    };
    while ANSI_ESCAPE.is_match(&stripped) {
        stripped = ANSI_ESCAPE.replace_all(&stripped, "").into_owned();
    }
    Cow::Owned(stripped)
}
