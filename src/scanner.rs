//! Reference scanner: finds `path:line` candidates in scratch text.

use regex::Regex;

use crate::error::Error;

/// Whitespace, then an absolute path, then `:` and the line digits.
/// Only the part after the whitespace is captured.
const REFERENCE_PATTERN: &str = r"\s(/.*?:\d+)";

/// Compiled reference pattern, built once per pane and reused for every scan.
#[derive(Debug, Clone)]
pub struct Scanner {
    /// The compiled `REFERENCE_PATTERN`.
    pattern: Regex,
}

impl Scanner {
    /// Compile the reference pattern.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pattern` if the pattern fails to compile.
    pub fn new() -> Result<Self, Error> {
        let pattern = Regex::new(REFERENCE_PATTERN)?;
        return Ok(Self { pattern });
    }

    /// Return every non-overlapping reference in `text`, left to right.
    ///
    /// Repeated references are returned once per occurrence; callers that
    /// need unique targets deduplicate later. A match that arrives without
    /// its capture group ends the scan early and the matches found so far
    /// are returned.
    pub fn scan<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut found = Vec::new();

        for cap in self.pattern.captures_iter(text) {
            let Some(group) = cap.get(1) else {
                tracing::warn!(
                    event = "scratchpad.scanner.capture_missing",
                    found = found.len(),
                    "reference match without capture group, returning partial results"
                );
                break;
            };
            found.push(group.as_str());
        }

        tracing::debug!(event = "scratchpad.scanner.scanned", matches = found.len());
        return found;
    }
}
