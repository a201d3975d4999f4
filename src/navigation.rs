//! Navigation bridge: turns a followed link into an open request for the host.

use std::path::Path;

use crate::host::Host;
use crate::types::OpenRequest;

/// Ask the host to open `path` at `line`.
///
/// The owning project is looked up first; a path outside every known project
/// still opens, just without a project attached.
pub fn navigate(host: &mut dyn Host, path: &Path, line: u32) {
    let project = host.project_for_path(path);
    if project.is_none() {
        tracing::debug!(
            event = "scratchpad.navigation.no_project",
            path = %path.display()
        );
    }

    tracing::debug!(event = "scratchpad.navigation.open", path = %path.display(), line);
    host.open_document(OpenRequest { line, path: path.to_path_buf(), project });
}
