//! Command-line interface for enginedesk, based on clap.
//!
//! The binary takes no subcommands; running it starts the console session.
//! Flags only adjust the ambient setup (config file location, color).

use std::path::PathBuf;

use clap::Parser;

/// Console tracker for company engines and their maintenance job queues.
#[derive(Debug, Parser)]
#[command(name = "enginedesk", version, about)]
pub struct Cli {
    /// Path to an alternate config file (default: ./enginedesk.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable styled terminal output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["enginedesk"]);
        assert!(cli.config.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["enginedesk", "--config", "/tmp/desk.toml", "--no-color"]);
        assert_eq!(cli.config.unwrap(), PathBuf::from("/tmp/desk.toml"));
        assert!(cli.no_color);
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
