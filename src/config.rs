use crate::error::SnakeError;

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use log::LevelFilter;

const MIN_CELLS: u16 = 2;

#[derive(Parser, Debug)]
#[command(name = "snake")]
#[command(version, about = "Wrap-around snake for the terminal")]
pub struct Cli {
    /// Playfield width in cells (defaults to the terminal width)
    #[arg(long)]
    pub width: Option<u16>,

    /// Playfield height in cells (defaults to the terminal height)
    #[arg(long)]
    pub height: Option<u16>,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "50")]
    pub tick_ms: u64,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            width: None,
            height: None,
            tick_interval: Duration::from_millis(50),
            seed: None,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self, SnakeError> {
        if cli.tick_ms == 0 {
            return Err(SnakeError::InvalidTickInterval);
        }

        if cli.width.map_or(false, |w| w < MIN_CELLS) || cli.height.map_or(false, |h| h < MIN_CELLS) {
            return Err(SnakeError::InvalidPlayfield {
                width: cli.width.unwrap_or(0),
                height: cli.height.unwrap_or(0),
            });
        }

        Ok(Settings {
            width: cli.width,
            height: cli.height,
            tick_interval: Duration::from_millis(cli.tick_ms),
            seed: cli.seed,
            log_file: cli.log_file,
            log_level: cli.log_level,
        })
    }

    /// Playfield size in cells, filling in whatever wasn't configured from
    /// the space available inside the terminal border.
    pub fn playfield(&self, term_size: (u16, u16)) -> Result<(u16, u16), SnakeError> {
        let (term_w, term_h) = term_size;
        let (max_w, max_h) = (term_w.saturating_sub(2), term_h.saturating_sub(2));

        let cols = self.width.unwrap_or(max_w).min(max_w);
        let rows = self.height.unwrap_or(max_h).min(max_h);

        if cols < MIN_CELLS || rows < MIN_CELLS {
            return Err(SnakeError::TerminalTooSmall { width: term_w, height: term_h });
        }

        Ok((cols, rows))
    }
}
