use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `champ` binary.
#[derive(Debug, Parser)]
#[command(
    name = "champ",
    version,
    about = "Champollion - documentation records from ES6 sources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use champ_core::enums::EntityKind;
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["champ", "--format", "raw", "--verbose", "extract", "src"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.dir, Path::new("src"));
                assert!(!args.parallel);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["champ", "schema", "--format", "json", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["champ", "--format", "table", "schema"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn show_parses_the_record_kind() {
        let cli = Cli::try_parse_from(["champ", "show", "src", "method", "src.a.A.run"])
            .expect("cli should parse");
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.kind, EntityKind::Method);
                assert_eq!(args.id, "src.a.A.run");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_rejects_unknown_kind() {
        let parsed = Cli::try_parse_from(["champ", "show", "src", "variable", "x"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn exports_takes_a_module_id() {
        let cli = Cli::try_parse_from(["champ", "exports", "src", "src.pkg"]).expect("cli should parse");
        match cli.command {
            Commands::Exports(args) => assert_eq!(args.module_id, "src.pkg"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn extract_accepts_parallel_override() {
        let cli = Cli::try_parse_from(["champ", "extract", "src", "--parallel"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Extract(args) if args.parallel));
    }
}
