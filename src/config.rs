use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::header::HeaderStyle;
use crate::pane::Preferences;
use crate::types::Project;

/// Project configuration loaded from `.scratchpad.toml`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Editor preferences handed to the pane.
    pub editor: Preferences,
    /// Header convention used when copying selections.
    pub header: HeaderStyle,
    /// Known projects, sorted by name.
    pub projects: Vec<Project>,
}

/// Raw TOML structure for `.scratchpad.toml`.
#[derive(serde::Deserialize)]
struct ScratchpadTomlConfig {
    /// `[editor]` table.
    #[serde(default)]
    editor: EditorTomlConfig,
    /// Top-level `header` key.
    #[serde(default)]
    header: HeaderStyle,
    /// `[projects]` table: name to folder.
    #[serde(default)]
    projects: BTreeMap<String, PathBuf>,
}

/// Raw `[editor]` table. Missing keys keep the preference defaults.
#[derive(serde::Deserialize, Default)]
struct EditorTomlConfig {
    /// Automatic indentation.
    auto_indent: Option<bool>,
    /// Pango-style font description.
    font: Option<String>,
    /// Spaces instead of tab characters.
    insert_spaces: Option<bool>,
    /// Tab width in columns.
    tab_width: Option<f64>,
}

impl Config {
    /// Load config from `.scratchpad.toml` in the given root directory.
    /// Returns defaults if the file doesn't exist. A file that exists but is
    /// malformed is an error, never a silent fallback.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(".scratchpad.toml");
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
        };
        return Self::parse(&content);
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the TOML is malformed.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let raw: ScratchpadTomlConfig = toml::from_str(content)?;

        let defaults = Preferences::default();
        let editor = Preferences {
            auto_indent: raw.editor.auto_indent.unwrap_or(defaults.auto_indent),
            font: raw.editor.font.unwrap_or(defaults.font),
            insert_spaces: raw.editor.insert_spaces.unwrap_or(defaults.insert_spaces),
            tab_width: raw.editor.tab_width.unwrap_or(defaults.tab_width),
        };

        let projects = raw
            .projects
            .into_iter()
            .map(|(name, folder)| return Project { folder, name })
            .collect();

        return Ok(Self { editor, header: raw.header, projects });
    }

    /// The project whose folder contains `path`. The deepest folder wins
    /// when projects are nested.
    pub fn project_for_path(&self, path: &Path) -> Option<&Project> {
        return self
            .projects
            .iter()
            .filter(|p| return path.starts_with(&p.folder))
            .max_by_key(|p| return p.folder.components().count());
    }
}
