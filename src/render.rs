//! Terminal rendering of the scratch pane.

use std::fmt::Write as _;

use crate::buffer::{TagKind, TextTag};
use crate::types::LinkRecord;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const UNDERLINE: &str = "\x1b[4m";

/// Render `text` with ANSI styling: bold headers, underlined links.
///
/// Styles are recomputed per character from the tags covering it, so
/// nested tags such as a link inside a header render correctly.
pub fn render_ansi(text: &str, tags: &[TextTag]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut active = (false, false);

    for (offset, ch) in text.chars().enumerate() {
        // Styles never run across a line break.
        if ch == '\n' {
            if active != (false, false) {
                out.push_str(RESET);
                active = (false, false);
            }
            out.push(ch);
            continue;
        }

        let style = style_at(tags, offset);
        if style != active {
            out.push_str(RESET);
            if style.0 {
                out.push_str(BOLD);
            }
            if style.1 {
                out.push_str(UNDERLINE);
            }
            active = style;
        }
        out.push(ch);
    }

    if active != (false, false) {
        out.push_str(RESET);
    }
    return out;
}

/// `(bold, underline)` for the character at `offset`.
fn style_at(tags: &[TextTag], offset: usize) -> (bool, bool) {
    let covers = |kind: TagKind| {
        return tags.iter().any(|t| return t.kind == kind && t.start <= offset && offset < t.end);
    };
    return (covers(TagKind::Header), covers(TagKind::Link));
}

/// One line per link: `start..end  path:line`.
pub fn render_link_list(records: &[LinkRecord]) -> String {
    let mut out = String::new();
    for r in records {
        let _ = writeln!(
            out,
            "{}..{}  {}:{}",
            r.start_offset,
            r.end_offset,
            r.target_path.display(),
            r.target_line
        );
    }
    return out;
}
