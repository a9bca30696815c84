use champ_config::ChampConfig;
use champ_parser::BuildOptions;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::commands::shared::build_environment;
use crate::output::output;

/// Handle `champ extract`.
pub fn handle(args: &ExtractArgs, config: &ChampConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut options = BuildOptions::from(&config.build);
    options.parallel |= args.parallel;

    let environment = build_environment(&args.dir, options)?;
    output(&environment, flags.format, config.output.pretty)
}
