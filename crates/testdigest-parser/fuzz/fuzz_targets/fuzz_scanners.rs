// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the Gradle and Vitest scanners
//!
//! Input is decoded lossily, the same way the CLI reads logs.

#![no_main]

use libfuzzer_sys::fuzz_target;

use testdigest_parser::Runner;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    // Detection and both scanners should never panic
    let _ = Runner::detect(&input);
    let _ = Runner::Gradle.parse(&input);
    let _ = Runner::Vitest.parse(&input);
});
