use champ_config::ChampConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &ChampConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => commands::extract::handle(&args, config, flags),
        Commands::Show(args) => commands::show::handle(&args, config, flags),
        Commands::Exports(args) => commands::exports::handle(&args, config, flags),
        Commands::Schema => commands::schema::handle(config, flags),
    }
}
