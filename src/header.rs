//! Provenance headers written above each copied snippet.

use std::path::Path;

use serde::Deserialize;

use crate::types::{Project, Selection};

/// Which header convention the engine writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    /// `"{path}:{line}"` with a one-based line. The only style that yields links.
    #[default]
    PathLine,
    /// `"{project} - {relative path}"`.
    ProjectRelative,
}

/// Build the header for `selection` in the given style.
///
/// `PathLine` shows the zero-based `start_line` as a one-based number, so the
/// resulting link navigates to the line the selection started on.
/// `ProjectRelative` falls back to the full path when there is no project or
/// the file lives outside the project folder.
pub fn build_header(style: HeaderStyle, selection: &Selection, project: Option<&Project>) -> String {
    return match style {
        HeaderStyle::PathLine => {
            let line = selection.start_line.saturating_add(1);
            format!("{}:{line}", selection.file_path.display())
        },
        HeaderStyle::ProjectRelative => project_relative(&selection.file_path, project),
    };
}

/// `"{project} - {relative}"`, or the bare path when no project contains it.
fn project_relative(file_path: &Path, project: Option<&Project>) -> String {
    let Some(project) = project else {
        return file_path.display().to_string();
    };
    let Ok(relative) = file_path.strip_prefix(&project.folder) else {
        tracing::debug!(
            event = "scratchpad.header.outside_project",
            path = %file_path.display(),
            project = %project.name
        );
        return file_path.display().to_string();
    };
    return format!("{} - {}", project.name, relative.display());
}
