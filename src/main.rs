mod cli;
mod config;
mod error;
mod fleet;
mod menu;
mod prompt;
mod session;
mod ui;
mod users;

use std::io;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::EnginedeskConfig;
use error::DeskError;
use menu::MenuController;
use prompt::Prompter;
use ui::Theme;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EnginedeskConfig::load_from(path)?,
        None => EnginedeskConfig::load()?,
    };

    let theme = Theme::for_color(config.color && !cli.no_color);
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout(), theme);
    let mut controller = MenuController::new(prompter, &config);

    match controller.run() {
        Ok(()) => Ok(()),
        // A closed stdin (piped session ending) is a normal way out.
        Err(DeskError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        Err(err) => Err(err.into()),
    }
}
