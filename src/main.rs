use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::{Config, WriteLogger};

use snake::config::{Cli, Settings};
use snake::game::{SessionEnd, SnakeGame};

fn main() -> Result<()> {
    let settings = Settings::from_cli(Cli::parse())?;
    init_logging(&settings)?;
    info!("starting snake");

    let mut game = SnakeGame::new(settings)?;

    // Setup can fail halfway through, so it runs under the restore too
    with_restore(&mut game, |game| {
        game.initialize()?;
        run(game)
    }, SnakeGame::restore)
}

fn run(game: &mut SnakeGame) -> Result<()> {
    if !game.show_intro()? {
        return Ok(());
    }

    while game.play()? == SessionEnd::Restart {}

    info!("quitting");
    Ok(())
}

/// Runs `body` and then `restore`, whatever `body` returned. An error from
/// `body` takes precedence over one from `restore`.
fn with_restore<G, B, R>(game: &mut G, body: B, restore: R) -> Result<()>
where
    B: FnOnce(&mut G) -> Result<()>,
    R: FnOnce(&mut G) -> Result<()>,
{
    let result = body(game);
    let restored = restore(game);

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result?;
    restored
}

fn init_logging(settings: &Settings) -> Result<()> {
    if let Some(path) = &settings.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(settings.log_level, Config::default(), file)
            .context("Failed to initialize logger")?;
    }

    Ok(())
}
