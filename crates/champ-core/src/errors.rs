//! Cross-cutting error types for Champollion.
//!
//! Extraction errors (`ExtractError`) live in `champ-parser` and
//! configuration errors in `champ-config`. The CLI converges all of them
//! through `anyhow`.

use thiserror::Error;

use crate::enums::EntityKind;

/// Errors raised by lookups on the environment model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// An identifier could not be interpreted as a dotted path.
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}
