use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and, where the user can
/// act on it, how to fix it.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::FileNotFound { path } => format!("\
# Error: File Not Found

`{}` does not exist or cannot be read.
", path.display()),

        Error::InvalidSelection { input, reason } => render_invalid_selection(input, reason),

        Error::Io(e) => format!("\
# Error: I/O

{e}
"),

        Error::Json(e) => format!("\
# Error: JSON Output

{e}
"),

        Error::Pattern(e) => format!("\
# Error: Reference Pattern

The `path:line` pattern failed to compile:

{e}
"),

        Error::TomlDe(e) => format!("\
# Error: Invalid TOML

{e}

## Fix

Check `.scratchpad.toml`. Recognized keys:

    header = \"path-line\"        # or \"project-relative\"

    [editor]
    tab_width = 4.0
    auto_indent = true
    insert_spaces = true
    font = \"Monospace 10\"

    [projects]
    name = \"/path/to/project\"
"),
    }
}

fn render_invalid_selection(input: &str, reason: &str) -> String {
    format!(
        "\
# Error: Invalid Selection

`{input}`: {reason}

## Fix

Name a file and one-based lines:

    scratchpad copy src/main.c:10
    scratchpad copy src/main.c:10-24
"
    )
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, reason = "tests")]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn every_diagnostic_starts_with_heading() {
        let errors = [
            Error::FileNotFound { path: PathBuf::from("a.c") },
            Error::InvalidSelection { input: "a.c".to_string(), reason: "no line".to_string() },
            Error::Io(std::io::Error::other("boom")),
        ];
        for e in &errors {
            assert!(render_error(e).starts_with("# Error"), "{e}");
        }
    }

    #[test]
    fn invalid_selection_shows_usage() {
        let md = render_error(&Error::InvalidSelection {
            input: "a.c:x".to_string(),
            reason: "line numbers must be positive integers".to_string(),
        });
        assert!(md.contains("`a.c:x`: line numbers must be positive integers"));
        assert!(md.contains("scratchpad copy src/main.c:10-24"));
    }
}
