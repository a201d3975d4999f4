//! The "copy selection to scratch" command.

use crate::header::{self, HeaderStyle};
use crate::host::Host;
use crate::pane::ScratchPane;

/// Copies the host's selection into a scratch pane under a provenance header.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScratchpadEngine {
    /// Header convention for every copy made by this engine.
    style: HeaderStyle,
}

impl ScratchpadEngine {
    /// An engine writing headers in `style`.
    pub const fn new(style: HeaderStyle) -> Self {
        return Self { style };
    }

    /// Copy the active selection to the top of `pane` and reveal the pane.
    ///
    /// Returns `false` without touching the pane when the host has no active
    /// document. An empty selection is still copied with its header.
    pub fn copy_selection(&self, host: &mut dyn Host, pane: &mut ScratchPane) -> bool {
        let Some(selection) = host.active_selection() else {
            tracing::debug!(event = "scratchpad.engine.no_active_document");
            return false;
        };

        let project = host
            .active_project()
            .or_else(|| return host.project_for_path(&selection.file_path));
        let header = header::build_header(self.style, &selection, project.as_ref());

        pane.append_snippet(&header, &selection.text);
        host.show_pane();

        tracing::info!(
            event = "scratchpad.engine.copied",
            header = %header,
            chars = selection.text.chars().count(),
            links = pane.links().len()
        );
        return true;
    }

    /// Header convention in use.
    pub const fn style(&self) -> HeaderStyle {
        return self.style;
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used, clippy::indexing_slicing, reason = "tests")]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::host::testing::RecordingHost;
    use crate::pane::{MouseButton, Preferences};
    use crate::types::{Project, Selection};

    fn selection(path: &str, line: u32, text: &str) -> Selection {
        return Selection {
            file_path: PathBuf::from(path),
            start_line: line,
            text: text.to_string(),
        };
    }

    fn pane() -> ScratchPane {
        return ScratchPane::new(&Preferences::default()).unwrap();
    }

    #[test]
    fn copy_writes_one_based_header_and_reveals_pane() {
        let mut host = RecordingHost {
            selection: Some(selection("/proj/a.c", 9, "int main(void);\n")),
            ..RecordingHost::default()
        };
        let mut pane = pane();

        assert!(ScratchpadEngine::default().copy_selection(&mut host, &mut pane));

        assert_eq!(pane.text(), "\n/proj/a.c:10\n\nint main(void);\n");
        assert_eq!(host.shown, 1);
        assert_eq!(pane.links().len(), 1);
    }

    #[test]
    fn copied_header_navigates_back_to_selection_line() {
        let mut host = RecordingHost {
            selection: Some(selection("/proj/a.c", 9, "x\n")),
            ..RecordingHost::default()
        };
        let mut pane = pane();
        ScratchpadEngine::default().copy_selection(&mut host, &mut pane);

        let start = pane.links().records()[0].start_offset;
        pane.on_click(start, MouseButton::Primary, &mut host);

        assert_eq!(host.opened[0].line, 10);
        assert_eq!(host.opened[0].path, PathBuf::from("/proj/a.c"));
    }

    #[test]
    fn no_active_document_leaves_pane_untouched() {
        let mut host = RecordingHost::default();
        let mut pane = pane();

        assert!(!ScratchpadEngine::default().copy_selection(&mut host, &mut pane));
        assert!(pane.text().is_empty());
        assert_eq!(host.shown, 0);
    }

    #[test]
    fn empty_selection_still_gets_header() {
        let mut host = RecordingHost {
            selection: Some(selection("/proj/a.c", 0, "")),
            ..RecordingHost::default()
        };
        let mut pane = pane();

        assert!(ScratchpadEngine::default().copy_selection(&mut host, &mut pane));
        assert_eq!(pane.text(), "\n/proj/a.c:1\n\n");
    }

    #[test]
    fn project_relative_uses_active_project() {
        let mut host = RecordingHost {
            active_project: Some(Project { folder: PathBuf::from("/proj"), name: "demo".to_string() }),
            selection: Some(selection("/proj/src/a.c", 4, "y\n")),
            ..RecordingHost::default()
        };
        let mut pane = pane();

        let engine = ScratchpadEngine::new(HeaderStyle::ProjectRelative);
        assert!(engine.copy_selection(&mut host, &mut pane));
        assert_eq!(pane.text(), "\ndemo - src/a.c\n\ny\n");
        assert!(pane.links().is_empty());
    }

    #[test]
    fn project_relative_falls_back_to_path_lookup() {
        let mut host = RecordingHost {
            projects: vec![Project { folder: PathBuf::from("/proj"), name: "demo".to_string() }],
            selection: Some(selection("/proj/src/a.c", 4, "")),
            ..RecordingHost::default()
        };
        let mut pane = pane();

        ScratchpadEngine::new(HeaderStyle::ProjectRelative).copy_selection(&mut host, &mut pane);
        assert!(pane.text().starts_with("\ndemo - src/a.c\n"));
    }
}
