//! Scratch buffer: the accumulated text plus its visual tags.

/// Visual treatment applied to a range of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Bold snippet header.
    Header,
    /// Underlined navigation link.
    Link,
}

/// A tagged character range `[start, end)` of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTag {
    /// Character offset just past the range.
    pub end: usize,
    /// Kind of styling.
    pub kind: TagKind,
    /// Character offset of the first tagged character.
    pub start: usize,
}

/// Accumulated snippets, newest on top.
#[derive(Debug, Default, Clone)]
pub struct ScratchBuffer {
    /// Tags over `text`, in the order they were applied.
    tags: Vec<TextTag>,
    /// Full buffer contents.
    text: String,
}

impl ScratchBuffer {
    /// An empty buffer.
    pub const fn new() -> Self {
        return Self { tags: Vec::new(), text: String::new() };
    }

    /// Prepend a snippet: `"\n" + header + "\n\n" + body` goes above the
    /// existing text, and the header part is tagged bold. Existing tags move
    /// down with the text they cover. Does not re-index links.
    pub fn add_text(&mut self, header: &str, body: &str) {
        let framed_header = format!("\n{header}\n\n");
        let header_chars = framed_header.chars().count();
        let inserted_chars = header_chars.saturating_add(body.chars().count());

        let mut text = String::with_capacity(
            framed_header.len().saturating_add(body.len()).saturating_add(self.text.len()),
        );
        text.push_str(&framed_header);
        text.push_str(body);
        text.push_str(&self.text);
        self.text = text;

        for tag in &mut self.tags {
            tag.start = tag.start.saturating_add(inserted_chars);
            tag.end = tag.end.saturating_add(inserted_chars);
        }
        self.tags.push(TextTag { end: header_chars, kind: TagKind::Header, start: 0 });
    }

    /// Tag `[start, end)` with `kind`.
    pub fn apply_tag(&mut self, kind: TagKind, start: usize, end: usize) {
        self.tags.push(TextTag { end, kind, start });
    }

    /// Number of characters in the buffer.
    pub fn char_len(&self) -> usize {
        return self.text.chars().count();
    }

    /// Remove every tag of `kind`.
    pub fn remove_tags(&mut self, kind: TagKind) {
        self.tags.retain(|t| return t.kind != kind);
    }

    /// Tags in application order.
    pub fn tags(&self) -> &[TextTag] {
        return &self.tags;
    }

    /// Full buffer contents.
    pub fn text(&self) -> &str {
        return &self.text;
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::indexing_slicing, reason = "tests")]
mod tests {
    use super::*;

    #[test]
    fn first_snippet_layout() {
        let mut buffer = ScratchBuffer::new();
        buffer.add_text("/a.c:1", "int x;\n");

        assert_eq!(buffer.text(), "\n/a.c:1\n\nint x;\n");
        assert_eq!(buffer.tags(), &[TextTag { end: 9, kind: TagKind::Header, start: 0 }]);
    }

    #[test]
    fn newest_snippet_goes_on_top() {
        let mut buffer = ScratchBuffer::new();
        buffer.add_text("/a.c:1", "first\n");
        buffer.add_text("/b.c:5", "second\n");

        assert_eq!(buffer.text(), "\n/b.c:5\n\nsecond\n\n/a.c:1\n\nfirst\n");
    }

    #[test]
    fn existing_tags_shift_by_inserted_characters() {
        let mut buffer = ScratchBuffer::new();
        buffer.add_text("/a.c:1", "é\n");
        buffer.add_text("/b.c:5", "ü\n");

        // "\n/b.c:5\n\n" is 9 characters, "ü\n" is 2.
        let headers: Vec<(usize, usize)> =
            buffer.tags().iter().map(|t| return (t.start, t.end)).collect();
        assert_eq!(headers, vec![(11, 20), (0, 9)]);
    }

    #[test]
    fn empty_body_still_gets_header() {
        let mut buffer = ScratchBuffer::new();
        buffer.add_text("/a.c:1", "");
        assert_eq!(buffer.text(), "\n/a.c:1\n\n");
        assert_eq!(buffer.char_len(), 9);
    }

    #[test]
    fn remove_tags_only_drops_one_kind() {
        let mut buffer = ScratchBuffer::new();
        buffer.add_text("/a.c:1", "");
        buffer.apply_tag(TagKind::Link, 1, 7);
        buffer.remove_tags(TagKind::Link);

        assert_eq!(buffer.tags().len(), 1);
        assert_eq!(buffer.tags()[0].kind, TagKind::Header);
    }
}
