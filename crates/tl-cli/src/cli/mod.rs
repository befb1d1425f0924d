use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, ThemeCommands};

/// Top-level CLI parser for the `tlx` binary.
#[derive(Debug, Parser)]
#[command(name = "tlx", version, about = "Tradelens - AI insights for trade dashboards")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw, html
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preference file path (defaults to the user config dir)
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            prefs: self.prefs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat, ThemeCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["tlx", "--format", "table", "--verbose", "charts"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Charts));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tlx", "charts", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tlx", "--format", "xml", "charts"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "raw", "html"] {
            let cli = Cli::try_parse_from(["tlx", "--format", value, "charts"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Charts));
        }
    }

    #[test]
    fn insight_parses_chart_and_flags() {
        let cli = Cli::try_parse_from(["tlx", "insight", "trade-value", "--regenerate", "--classes"])
            .expect("cli should parse");

        let Commands::Insight(args) = cli.command else {
            panic!("expected insight command");
        };
        assert_eq!(args.chart, "trade-value");
        assert!(args.regenerate);
        assert!(args.classes);
    }

    #[test]
    fn insight_requires_chart() {
        assert!(Cli::try_parse_from(["tlx", "insight"]).is_err());
    }

    #[test]
    fn render_file_is_optional() {
        let cli = Cli::try_parse_from(["tlx", "render"]).expect("cli should parse");
        let Commands::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert!(args.file.is_none());
        assert!(!args.classes);
    }

    #[test]
    fn theme_set_takes_name() {
        let cli = Cli::try_parse_from(["tlx", "theme", "set", "ocean"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: ThemeCommands::Set { ref name }
            } if name == "ocean"
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["tlx", "--prefs", "/tmp/prefs.toml", "theme", "get"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.prefs.as_deref(), Some(Path::new("/tmp/prefs.toml")));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
