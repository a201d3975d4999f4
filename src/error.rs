/// Crate-level error types for scratchpad diagnostics.
use std::path::PathBuf;

/// Every error names the file, input, or reason it came from so a diagnostic
/// can be rendered without a debugger. Failures inside the link engine itself
/// (scan faults, unparseable line numbers, unknown projects) are logged and
/// never reach this type.
#[allow(clippy::error_impl_error, reason = "crate-level error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file named on the command line does not exist or cannot be read.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// A selection argument could not be turned into a line range.
    #[error("invalid selection `{input}`: {reason}")]
    InvalidSelection {
        /// The selection text as given.
        input: String,
        /// Why the selection was rejected.
        reason: String,
    },

    /// Underlying I/O error from the filesystem or a standard stream.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON serialization of link records or open requests failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped JSON error.
        #[from]
        serde_json::Error,
    ),

    /// The reference pattern failed to compile.
    #[error("reference pattern: {0}")]
    Pattern(
        /// The wrapped regex compilation error.
        #[from]
        regex::Error,
    ),

    /// `.scratchpad.toml` exists but is malformed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
