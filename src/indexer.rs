//! Span indexer: turns scanned references into link records over the text.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::types::LinkRecord;

/// Converts byte positions into character offsets.
/// Positions must be queried in non-decreasing order.
struct CharCounter<'t> {
    /// Last byte position converted.
    byte: usize,
    /// Character offset of `byte`.
    chars: usize,
    /// Text being measured.
    text: &'t str,
}

impl<'t> CharCounter<'t> {
    /// Start counting at the beginning of `text`.
    const fn new(text: &'t str) -> Self {
        return Self { byte: 0, chars: 0, text };
    }

    /// Character offset of the byte position `byte`.
    fn char_offset(&mut self, byte: usize) -> usize {
        let skipped = self.text.get(self.byte..byte).map_or(0, |s| return s.chars().count());
        self.chars = self.chars.saturating_add(skipped);
        self.byte = byte;
        return self.chars;
    }
}

/// Build one link record per occurrence of each pattern in `text`.
///
/// Patterns are processed in the order given; all occurrences of one pattern
/// are recorded before the next pattern is searched. A pattern that repeats
/// an earlier one is skipped because its occurrences are already recorded.
pub fn index(text: &str, patterns: &[&str]) -> Vec<LinkRecord> {
    let mut records = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for &pattern in patterns {
        if pattern.is_empty() || !seen.insert(pattern) {
            continue;
        }
        index_occurrences(text, pattern, &mut records);
    }

    tracing::debug!(
        event = "scratchpad.indexer.indexed",
        patterns = seen.len(),
        records = records.len()
    );
    return records;
}

/// Record every occurrence of `pattern`, resuming one character after each hit.
fn index_occurrences(text: &str, pattern: &str, records: &mut Vec<LinkRecord>) {
    let (target_path, target_line) = split_reference(pattern);
    let pattern_chars = pattern.chars().count();
    let mut counter = CharCounter::new(text);
    let mut cursor = 0_usize;

    while let Some(found) = text.get(cursor..).and_then(|rest| return rest.find(pattern)) {
        let begin = cursor.saturating_add(found);
        let start_offset = counter.char_offset(begin);

        records.push(LinkRecord {
            end_offset: start_offset.saturating_add(pattern_chars),
            start_offset,
            target_line,
            target_path: target_path.clone(),
        });

        cursor = next_char_boundary(text, begin);
    }
}

/// Byte position of the character following the one at `byte`.
fn next_char_boundary(text: &str, byte: usize) -> usize {
    let width = text
        .get(byte..)
        .and_then(|rest| return rest.chars().next())
        .map_or(1, char::len_utf8);
    return byte.saturating_add(width);
}

/// Parse the leading digits of `raw` as a line number.
/// Trailing non-digits are ignored, no digits yields 0, overflow saturates.
pub fn parse_line_number(raw: &str) -> u32 {
    return raw
        .chars()
        .map_while(|c| return c.to_digit(10))
        .fold(0_u32, |acc, digit| return acc.saturating_mul(10).saturating_add(digit));
}

/// Split a `path:line` reference on its first colon.
/// Without a colon the whole text is the path and the line is 0.
fn split_reference(reference: &str) -> (PathBuf, u32) {
    return match reference.split_once(':') {
        Some((path, line)) => (PathBuf::from(path), parse_line_number(line)),
        None => (PathBuf::from(reference), 0),
    };
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::indexing_slicing, reason = "tests")]
mod tests {
    use super::*;

    #[test]
    fn single_reference_offsets() {
        let text = "saw error at /src/foo.c:42 during build";
        let records = index(text, &["/src/foo.c:42"]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target_path, PathBuf::from("/src/foo.c"));
        assert_eq!(records[0].target_line, 42);
        assert_eq!(records[0].start_offset, 13);
        assert_eq!(records[0].end_offset, 26);
    }

    #[test]
    fn every_occurrence_is_recorded() {
        let text = "\n/a.c:1\n\nx\n/a.c:1\n\ny /a.c:1";
        let records = index(text, &["/a.c:1"]);

        let starts: Vec<usize> = records.iter().map(|r| return r.start_offset).collect();
        assert_eq!(starts, vec![1, 11, 21]);
        assert!(records.iter().all(|r| return r.end_offset == r.start_offset + 6));
    }

    #[test]
    fn repeated_pattern_is_indexed_once() {
        let text = " /a.c:1 and /a.c:1";
        let records = index(text, &["/a.c:1", "/a.c:1"]);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn occurrences_without_leading_whitespace_are_linked() {
        let text = " /a.c:1 (/a.c:1)";
        let records = index(text, &["/a.c:1"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].start_offset, 9);
    }

    #[test]
    fn pattern_order_is_outer_loop() {
        let text = " /b.c:2 /a.c:1 /b.c:2";
        let records = index(text, &["/a.c:1", "/b.c:2"]);

        let order: Vec<(u32, usize)> =
            records.iter().map(|r| return (r.target_line, r.start_offset)).collect();
        assert_eq!(order, vec![(1, 8), (2, 1), (2, 15)]);
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let text = "héllo wörld /src/ü.c:7 end";
        let records = index(text, &["/src/ü.c:7"]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start_offset, 12);
        assert_eq!(records[0].end_offset, 22);
    }

    #[test]
    fn self_overlapping_pattern_found_at_each_start() {
        let records = index("aaaa", &["aa"]);
        let starts: Vec<usize> = records.iter().map(|r| return r.start_offset).collect();
        assert_eq!(starts, vec![0, 1, 2]);
    }

    #[test]
    fn no_patterns_no_records() {
        assert!(index("anything /a.c:1", &[]).is_empty());
        assert!(index("", &["/a.c:1"]).is_empty());
        assert!(index("text", &[""]).is_empty());
    }

    #[test]
    fn forgiving_line_parser() {
        assert_eq!(parse_line_number("42"), 42);
        assert_eq!(parse_line_number("42abc"), 42);
        assert_eq!(parse_line_number("abc"), 0);
        assert_eq!(parse_line_number(""), 0);
        assert_eq!(parse_line_number("99999999999999"), u32::MAX);
    }

    #[test]
    fn splits_on_first_colon_only() {
        let (path, line) = split_reference("/a:b.c:12");
        assert_eq!(path, PathBuf::from("/a"));
        assert_eq!(line, 0);

        let (path, line) = split_reference("/no/colon");
        assert_eq!(path, PathBuf::from("/no/colon"));
        assert_eq!(line, 0);
    }
}
