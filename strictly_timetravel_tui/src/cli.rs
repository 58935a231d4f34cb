//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe in the terminal and rewind to any earlier move.
#[derive(Debug, Parser)]
#[command(name = "timetravel", version, about)]
pub struct Cli {
    /// TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List moves newest first (overrides the config file).
    #[arg(long)]
    pub reversed: bool,

    /// Write logs to this file (the terminal is owned by the UI).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "strictly_timetravel=trace". Defaults to RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the final game view as JSON on exit.
    #[arg(long)]
    pub dump: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "timetravel",
            "--config",
            "game.toml",
            "--reversed",
            "--log-file",
            "tt.log",
            "--dump",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert!(cli.reversed);
        assert_eq!(cli.log_file, Some(PathBuf::from("tt.log")));
        assert!(cli.dump);
        assert_eq!(cli.log_level, None);
    }
}
