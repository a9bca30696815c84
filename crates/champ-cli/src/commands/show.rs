use anyhow::Context;
use champ_config::ChampConfig;
use champ_parser::BuildOptions;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::shared::build_environment;
use crate::output::output;

/// Handle `champ show`.
pub fn handle(args: &ShowArgs, config: &ChampConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let environment = build_environment(&args.dir, BuildOptions::from(&config.build))?;
    let record = environment
        .record(args.kind, &args.id)
        .with_context(|| format!("no {} record for '{}'", args.kind, args.id))?;
    output(&record, flags.format, config.output.pretty)
}
