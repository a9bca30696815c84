use anyhow::Context;
use champ_config::ChampConfig;
use champ_parser::{BuildOptions, ExportResolver, ResolvedExport};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportsArgs;
use crate::commands::shared::build_environment;
use crate::output::output;

/// Resolved export list of one module.
#[derive(Debug, Serialize)]
struct ExportsResponse {
    module_id: String,
    exports: Vec<ResolvedExport>,
    /// Messages for entries whose target could not be found.
    unresolved: Vec<String>,
}

/// Handle `champ exports`.
pub fn handle(args: &ExportsArgs, config: &ChampConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let environment = build_environment(&args.dir, BuildOptions::from(&config.build))?;
    let resolution = ExportResolver::new(&environment)
        .resolve_module(&args.module_id)
        .with_context(|| format!("cannot resolve exports of '{}'", args.module_id))?;

    let response = ExportsResponse {
        module_id: args.module_id.clone(),
        exports: resolution.resolved,
        unresolved: resolution
            .unresolved
            .iter()
            .map(ToString::to_string)
            .collect(),
    };
    output(&response, flags.format, config.output.pretty)
}
