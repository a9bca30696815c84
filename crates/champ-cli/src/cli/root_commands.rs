use std::path::PathBuf;
use std::str::FromStr;

use champ_core::enums::EntityKind;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build and print the environment of a source directory.
    Extract(ExtractArgs),
    /// Print one record of the environment.
    Show(ShowArgs),
    /// Print the resolved export list of a module.
    Exports(ExportsArgs),
    /// Print the JSON Schema of the environment.
    Schema,
}

/// Arguments for `champ extract`.
#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Source directory to walk.
    pub dir: PathBuf,
    /// Extract files in parallel (overrides `build.parallel`).
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for `champ show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Source directory to walk.
    pub dir: PathBuf,
    /// Record kind: module, file, class, method, attribute, function, data.
    #[arg(value_parser = EntityKind::from_str)]
    pub kind: EntityKind,
    /// Dotted id of the record (a file id for `file`).
    pub id: String,
}

/// Arguments for `champ exports`.
#[derive(Clone, Debug, Args)]
pub struct ExportsArgs {
    /// Source directory to walk.
    pub dir: PathBuf,
    /// Dotted id of the module.
    pub module_id: String,
}
