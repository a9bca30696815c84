use champ_config::ChampConfig;
use champ_core::Environment;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `champ schema`.
pub fn handle(config: &ChampConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Environment);
    output(&schema, flags.format, config.output.pretty)
}
