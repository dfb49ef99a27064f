// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Failure block accumulation shared by both scanners

use tracing::debug;

/// Lines of the failure block currently being captured
///
/// Only the first `max_lines` lines are stored; later ones are counted.
#[derive(Debug)]
pub(crate) struct FailureBlock {
    lines: Vec<String>,
    seen: usize,
    open: bool,
    max_lines: usize,
}

impl FailureBlock {
    /// Create a closed accumulator that keeps at most `max_lines` per block
    pub(crate) fn new(max_lines: usize) -> Self {
        Self {
            lines: Vec::new(),
            seen: 0,
            open: false,
            max_lines,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    /// Number of lines captured so far, including any beyond the cap
    pub(crate) fn len(&self) -> usize {
        self.seen
    }

    /// Start a new block seeded with `line`, discarding any open one
    pub(crate) fn open(&mut self, line: &str) {
        if self.open {
            debug!(lines = self.seen, "discarding open failure block");
        }
        self.lines.clear();
        self.lines.push(line.to_string());
        self.seen = 1;
        self.open = true;
    }

    pub(crate) fn push(&mut self, line: &str) {
        self.seen += 1;
        if self.lines.len() < self.max_lines {
            self.lines.push(line.to_string());
        }
    }

    /// Close the block, returning its first `max_lines` lines joined by `\n`
    ///
    /// Returns `None` if no block was open.
    pub(crate) fn flush(&mut self) -> Option<String> {
        if !self.open {
            return None;
        }
        self.open = false;
        let seen = std::mem::take(&mut self.seen);
        let lines = std::mem::take(&mut self.lines);
        if lines.is_empty() {
            return None;
        }
        debug!(
            lines = seen,
            kept = lines.len().min(self.max_lines),
            "flushing failure block"
        );
        let kept = &lines[..lines.len().min(self.max_lines)];
        Some(kept.join("\n"))
    }

    /// Drop the open block at end of input
    pub(crate) fn finish(self) {
        if self.open {
            debug!(lines = self.seen, "dropping unterminated failure block");
        }
    }
}
