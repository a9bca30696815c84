//! # champ-parser
//!
//! Comment-aware, regex-driven extraction of a documentation model from an
//! ES6 source tree.
//!
//! The pipeline, per file:
//! 1. [`normalizer`] blanks out comments and collapses every balanced
//!    `{...}` region into a `{}` placeholder, keeping line numbers intact.
//! 2. [`extractors`] match declarations, imports, and exports on the
//!    collapsed text and re-inflate bodies and values from the side table.
//! 3. [`docstring`] attaches the `/** ... */` comment above each declaration.
//! 4. [`file`] assembles the file record and folds local re-exports into
//!    their declarations.
//!
//! [`builder`] walks a directory, names modules through [`module_resolver`],
//! and merges every file into a [`champ_core::Environment`]. [`resolver`]
//! maps export entries to the entities they document.

pub mod builder;
pub mod docstring;
pub mod error;
pub mod extractors;
pub mod file;
pub mod module_resolver;
pub mod normalizer;
pub mod resolver;

pub use builder::{BuildOptions, EnvironmentBuilder, fetch_environment};
pub use error::ExtractError;
pub use file::extract_file;
pub use resolver::{ExportResolution, ExportResolver, ExportTarget, ResolvedExport};
