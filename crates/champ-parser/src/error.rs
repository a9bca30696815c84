//! Extraction error types for champ-parser.

use std::path::PathBuf;

use champ_core::errors::CoreError;

/// Errors that can occur while building or resolving an environment.
///
/// Only [`ExtractError::InputNotAccessible`] aborts a build. The other
/// variants describe degraded results: they are logged and the offending
/// construct, file, or export is skipped.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Input not accessible: {}", path.display())]
    InputNotAccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unreadable file {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unresolvable reference: export {export_id} names unknown module {module_id}")]
    UnresolvableReference { export_id: String, module_id: String },

    #[error("Malformed doc comment above line {line}")]
    MalformedDocComment { line: usize },

    #[error("Ambiguous construct at line {line}: {text}")]
    AmbiguousConstruct { line: usize, text: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
