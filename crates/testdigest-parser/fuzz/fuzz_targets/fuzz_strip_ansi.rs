// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for escape sequence stripping
//!
//! Stripping must never panic and must be idempotent.

#![no_main]

use libfuzzer_sys::fuzz_target;

use testdigest_parser::strip_ansi;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let once = strip_ansi(&input).into_owned();
    assert_eq!(strip_ansi(&once), once);
});
