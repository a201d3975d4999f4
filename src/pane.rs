//! The scratch pane: buffer, link table, view settings, and event handling.

use crate::buffer::{ScratchBuffer, TagKind, TextTag};
use crate::error::Error;
use crate::host::Host;
use crate::links::{self, LinkTable};
use crate::navigation;
use crate::scanner::Scanner;
use crate::types::LinkRecord;

/// Font family used when the preference names none.
const DEFAULT_FONT_FAMILY: &str = "Monospace";

/// Widest tab the view accepts, in columns.
const MAX_TAB_WIDTH: u32 = 32;

/// Outcome of a click on the pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    /// The link that was followed, if the click landed on one.
    pub followed: Option<LinkRecord>,
}

impl ClickOutcome {
    /// Whether the host should keep processing the click (caret placement).
    /// Following a link never consumes the event.
    pub const fn propagate(&self) -> bool {
        return true;
    }
}

/// Pointer shape over the text area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorShape {
    /// Pointing hand, shown over a link.
    Pointer,
    /// Text insertion beam.
    #[default]
    Text,
}

/// A font description in `"Family [Style] [size]"` form.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescription {
    /// Family plus any style words.
    pub family: String,
    /// Point size, when one was given.
    pub size: Option<f64>,
}

impl FontDescription {
    /// Parse a description such as `"Monospace 10"` or `"Fira Code Bold 11.5"`.
    /// A trailing positive number is the size; everything before it is the
    /// family. An empty family falls back to monospace.
    pub fn parse(description: &str) -> Self {
        let trimmed = description.trim();
        let (family, size) = match trimmed.rsplit_once(char::is_whitespace) {
            Some((family, last)) => match last.parse::<f64>() {
                Ok(size) if size.is_finite() && size > 0.0 => (family.trim(), Some(size)),
                _ => (trimmed, None),
            },
            None => (trimmed, None),
        };

        let family = if family.is_empty() { DEFAULT_FONT_FAMILY } else { family };
        return Self { family: family.to_string(), size };
    }
}

/// Mouse button that produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Middle button.
    Middle,
    /// Left (primary) button.
    Primary,
    /// Right (context menu) button.
    Secondary,
}

/// Editor preferences as the host reports them.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Automatic indentation on newline and tab.
    pub auto_indent: bool,
    /// Font description string.
    pub font: String,
    /// Insert spaces instead of tab characters.
    pub insert_spaces: bool,
    /// Tab width in columns.
    pub tab_width: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        return Self {
            auto_indent: true,
            font: format!("{DEFAULT_FONT_FAMILY} 10"),
            insert_spaces: true,
            tab_width: 4.0,
        };
    }
}

/// Settings the text view is configured with, derived from `Preferences`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    /// Automatic indentation.
    pub auto_indent: bool,
    /// Parsed font.
    pub font: FontDescription,
    /// Tab key indents the current line.
    pub indent_on_tab: bool,
    /// Indent width in columns; `None` follows the tab width.
    pub indent_width: Option<u32>,
    /// Spaces instead of tabs.
    pub insert_spaces: bool,
    /// Tab width in whole columns, at least 1.
    pub tab_width: u32,
}

impl ViewSettings {
    /// Derive view settings from the host's preferences.
    pub fn from_preferences(preferences: &Preferences) -> Self {
        return Self {
            auto_indent: preferences.auto_indent,
            font: FontDescription::parse(&preferences.font),
            indent_on_tab: preferences.auto_indent,
            indent_width: None,
            insert_spaces: preferences.insert_spaces,
            tab_width: tab_columns(preferences.tab_width),
        };
    }
}

/// Round a tab width preference to whole columns in `1..=MAX_TAB_WIDTH`.
/// Non-finite widths fall back to the default.
#[allow(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 1..=MAX_TAB_WIDTH before the cast"
)]
fn tab_columns(width: f64) -> u32 {
    if !width.is_finite() {
        return tab_columns(Preferences::default().tab_width);
    }
    let clamped = width.round().clamp(1.0, f64::from(MAX_TAB_WIDTH));
    return clamped as u32;
}

/// A scratch pane: accumulated snippets with clickable `path:line` links.
#[derive(Debug)]
pub struct ScratchPane {
    /// Accumulated text and its tags.
    buffer: ScratchBuffer,
    /// Cursor shape last set by hover handling.
    cursor: CursorShape,
    /// Links for the current buffer generation.
    links: LinkTable,
    /// Compiled reference pattern.
    scanner: Scanner,
    /// Current view configuration.
    view: ViewSettings,
}

impl ScratchPane {
    /// An empty pane configured from `preferences`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pattern` if the reference pattern fails to compile.
    pub fn new(preferences: &Preferences) -> Result<Self, Error> {
        return Ok(Self {
            buffer: ScratchBuffer::new(),
            cursor: CursorShape::default(),
            links: LinkTable::new(),
            scanner: Scanner::new()?,
            view: ViewSettings::from_preferences(preferences),
        });
    }

    /// Prepend a snippet under `header` and rebuild the links.
    pub fn append_snippet(&mut self, header: &str, body: &str) {
        self.buffer.add_text(header, body);
        self.reindex();
    }

    /// Current cursor shape.
    pub const fn cursor(&self) -> CursorShape {
        return self.cursor;
    }

    /// Link table for the current text.
    pub const fn links(&self) -> &LinkTable {
        return &self.links;
    }

    /// Handle a button press at character `offset`.
    ///
    /// Only the primary button follows links. The click is never consumed,
    /// so the host should still move the caret.
    pub fn on_click(&self, offset: usize, button: MouseButton, host: &mut dyn Host) -> ClickOutcome {
        if button != MouseButton::Primary {
            return ClickOutcome { followed: None };
        }

        let followed = links::find_link_at(&self.links, offset).cloned();
        if let Some(link) = &followed {
            tracing::debug!(
                event = "scratchpad.pane.link_clicked",
                offset,
                path = %link.target_path.display(),
                line = link.target_line
            );
            navigation::navigate(host, &link.target_path, link.target_line);
        }
        return ClickOutcome { followed };
    }

    /// Handle pointer motion over character `offset`.
    ///
    /// Returns the new cursor shape when it changes, `None` when the current
    /// shape already fits.
    pub fn on_pointer_move(&mut self, offset: usize) -> Option<CursorShape> {
        let wanted = if links::find_link_at(&self.links, offset).is_some() {
            CursorShape::Pointer
        } else {
            CursorShape::Text
        };

        if wanted == self.cursor {
            return None;
        }
        self.cursor = wanted;
        return Some(wanted);
    }

    /// Reconfigure the view after the host's preferences changed.
    pub fn preferences_changed(&mut self, preferences: &Preferences) {
        self.view = ViewSettings::from_preferences(preferences);
        tracing::debug!(
            event = "scratchpad.pane.preferences_changed",
            tab_width = self.view.tab_width,
            font = %self.view.font.family
        );
    }

    /// Rebuild the link table and link underlines from the whole buffer.
    ///
    /// The new table is complete before it replaces the old one, so lookups
    /// never see a mix of generations.
    pub fn reindex(&mut self) {
        self.links.rebuild(&self.scanner, self.buffer.text());

        self.buffer.remove_tags(TagKind::Link);
        for record in self.links.records() {
            self.buffer.apply_tag(TagKind::Link, record.start_offset, record.end_offset);
        }
    }

    /// Tags over the text, headers and links.
    pub fn tags(&self) -> &[TextTag] {
        return self.buffer.tags();
    }

    /// Full pane text.
    pub fn text(&self) -> &str {
        return self.buffer.text();
    }

    /// Current view configuration.
    pub const fn view_settings(&self) -> &ViewSettings {
        return &self.view;
    }
}
