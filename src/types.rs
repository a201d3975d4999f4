/// Core domain types shared by the link engine and its host.
use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::Serialize;

/// One occurrence of a `path:line` reference in the scratch buffer.
/// Offsets are character offsets into the buffer generation that produced
/// the record; `start_offset < end_offset` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// Character offset just past the last character of the reference.
    pub end_offset: usize,
    /// Character offset of the first character of the reference.
    pub start_offset: usize,
    /// Line number as written after the colon.
    pub target_line: u32,
    /// Path as written before the colon.
    pub target_path: PathBuf,
}

impl LinkRecord {
    /// Offsets that count as "on" this link for hover and click.
    /// Both ends are inclusive.
    pub const fn hit_range(&self) -> RangeInclusive<usize> {
        return self.start_offset..=self.end_offset;
    }
}

/// Request sent to the host editor when a link is followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenRequest {
    /// Line to reveal, verbatim from the link record.
    pub line: u32,
    /// File to open.
    pub path: PathBuf,
    /// Owning project, when the host knows one.
    pub project: Option<Project>,
}

/// A project as known to the host editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Root folder of the project.
    pub folder: PathBuf,
    /// Display name.
    pub name: String,
}

/// The host's currently selected text in the active document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Path of the active document.
    pub file_path: PathBuf,
    /// Zero-based line of the first selected character.
    pub start_line: u32,
    /// Selected text. May be empty.
    pub text: String,
}
