//! The editor the scratch pane lives in, and a command-line stand-in for it.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;
use crate::types::{OpenRequest, Project, Selection};

/// Capabilities the scratch pane needs from its host editor.
pub trait Host {
    /// Project of the active document, if any.
    fn active_project(&self) -> Option<Project>;

    /// Current selection in the active document; `None` when no document is open.
    fn active_selection(&self) -> Option<Selection>;

    /// Open `request.path` and reveal `request.line`.
    fn open_document(&mut self, request: OpenRequest);

    /// Project owning `path`, if any.
    fn project_for_path(&self, path: &Path) -> Option<Project>;

    /// Bring the scratch pane into view.
    fn show_pane(&mut self);
}

/// Host backed by files on disk and the projects in `.scratchpad.toml`.
/// Open requests are collected in order for the caller to report.
#[derive(Debug, Default)]
pub struct CliHost {
    /// Projects and preferences.
    config: Config,
    /// Open requests received so far.
    opened: Vec<OpenRequest>,
    /// Selection the next copy will read.
    selection: Option<Selection>,
    /// Times the pane was asked to show itself.
    shown: usize,
}

impl CliHost {
    /// A host with no active selection.
    pub fn new(config: Config) -> Self {
        return Self { config, opened: Vec::new(), selection: None, shown: 0 };
    }

    /// Take the open requests received since the last call.
    pub fn drain_opened(&mut self) -> Vec<OpenRequest> {
        return std::mem::take(&mut self.opened);
    }

    /// Make the lines of `spec` the active selection.
    ///
    /// `spec` is `path:line` or `path:start-end`, one-based and inclusive.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSelection` if `spec` is malformed or past the end
    /// of the file, or `Error::FileNotFound` if the file cannot be read.
    pub fn select(&mut self, spec: &str) -> Result<(), Error> {
        let (path, first, last) = parse_selection_spec(spec)?;
        let content = std::fs::read_to_string(&path)
            .map_err(|_err| return Error::FileNotFound { path: path.clone() })?;

        let text = select_lines(&content, first, last).ok_or_else(|| {
            return Error::InvalidSelection {
                input: spec.to_string(),
                reason: format!("file has {} lines", content.lines().count()),
            };
        })?;

        let file_path = std::path::absolute(&path)?;
        self.selection = Some(Selection {
            file_path,
            start_line: first.saturating_sub(1),
            text,
        });
        return Ok(());
    }

    /// Number of times the pane was revealed.
    pub const fn shown(&self) -> usize {
        return self.shown;
    }
}

impl Host for CliHost {
    fn active_project(&self) -> Option<Project> {
        let selection = self.selection.as_ref()?;
        return self.project_for_path(&selection.file_path);
    }

    fn active_selection(&self) -> Option<Selection> {
        return self.selection.clone();
    }

    fn open_document(&mut self, request: OpenRequest) {
        tracing::info!(
            event = "scratchpad.host.open_document",
            path = %request.path.display(),
            line = request.line
        );
        self.opened.push(request);
    }

    fn project_for_path(&self, path: &Path) -> Option<Project> {
        return self.config.project_for_path(path).cloned();
    }

    fn show_pane(&mut self) {
        self.shown = self.shown.saturating_add(1);
    }
}

/// Split `path:start[-end]` into a path and a one-based inclusive line range.
///
/// # Errors
///
/// Returns `Error::InvalidSelection` for a missing colon, non-numeric or zero
/// lines, or an end before the start.
fn parse_selection_spec(spec: &str) -> Result<(PathBuf, u32, u32), Error> {
    let invalid = |reason: &str| {
        return Error::InvalidSelection { input: spec.to_string(), reason: reason.to_string() };
    };

    let Some((path, range)) = spec.rsplit_once(':') else {
        return Err(invalid("expected path:line or path:start-end"));
    };
    if path.is_empty() {
        return Err(invalid("missing path"));
    }

    let (start, end) = range.split_once('-').unwrap_or((range, range));
    let (Ok(first), Ok(last)) = (start.parse::<u32>(), end.parse::<u32>()) else {
        return Err(invalid("line numbers must be positive integers"));
    };
    if first == 0 {
        return Err(invalid("line numbers start at 1"));
    }
    if last < first {
        return Err(invalid("end line is before start line"));
    }

    return Ok((PathBuf::from(path), first, last));
}

/// Lines `first..=last` (one-based) of `content`, each with its newline.
/// `None` if the range runs past the end of the content.
fn select_lines(content: &str, first: u32, last: u32) -> Option<String> {
    let skip = usize::try_from(first.saturating_sub(1)).ok()?;
    let take = usize::try_from(last.saturating_sub(first).saturating_add(1)).ok()?;

    let lines: Vec<&str> = content.split_inclusive('\n').skip(skip).take(take).collect();
    if lines.len() != take {
        return None;
    }
    return Some(lines.concat());
}


#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used, reason = "tests")]
mod tests {
    use super::*;

    #[test]
    fn parses_single_line_and_range() {
        let (path, first, last) = parse_selection_spec("src/a.c:10").unwrap();
        assert_eq!(path, PathBuf::from("src/a.c"));
        assert_eq!((first, last), (10, 10));

        let (_, first, last) = parse_selection_spec("src/a.c:3-7").unwrap();
        assert_eq!((first, last), (3, 7));
    }

    #[test]
    fn rejects_malformed_specs() {
        for spec in ["src/a.c", ":3", "a.c:0", "a.c:x", "a.c:7-3", "a.c:3-"] {
            assert!(
                matches!(parse_selection_spec(spec), Err(Error::InvalidSelection { .. })),
                "accepted {spec}"
            );
        }
    }

    #[test]
    fn selects_inclusive_line_range() {
        let content = "one\ntwo\nthree\nfour";
        assert_eq!(select_lines(content, 2, 3).as_deref(), Some("two\nthree\n"));
        assert_eq!(select_lines(content, 4, 4).as_deref(), Some("four"));
        assert_eq!(select_lines(content, 4, 5), None);
    }

    #[test]
    fn select_reads_file_and_sets_zero_based_start() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("a.c");
        std::fs::write(&file, "l1\nl2\nl3\n").unwrap();

        let mut host = CliHost::new(Config::default());
        host.select(&format!("{}:2-3", file.display())).unwrap();

        let selection = host.active_selection().unwrap();
        assert_eq!(selection.start_line, 1);
        assert_eq!(selection.text, "l2\nl3\n");
        assert_eq!(selection.file_path, file);
    }

    #[test]
    fn select_missing_file_is_not_found() {
        let mut host = CliHost::new(Config::default());
        let result = host.select("/definitely/not/here.c:1");
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn open_requests_are_drained_in_order() {
        let mut host = CliHost::new(Config::default());
        for line in [3, 1] {
            host.open_document(OpenRequest { line, path: PathBuf::from("/a.c"), project: None });
        }
        let lines: Vec<u32> = host.drain_opened().iter().map(|r| return r.line).collect();
        assert_eq!(lines, vec![3, 1]);
        assert!(host.drain_opened().is_empty());
    }
}
