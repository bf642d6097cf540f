use std::{thread::sleep, time::{Duration, Instant}};

use crate::{Coords, TermInt};
use crate::config::Settings;
use crate::geometry::{Bounds, Rect, CELL_SIZE};
use crate::input::{map_key, is_ctrl_c, KeyAction};
use crate::schedule::Throttle;
use crate::snake::{Snake, Direction::*};
use crate::state::GameState;
use crate::term::TermManager;

use anyhow::{Context, Result};
use log::info;

const POLL_INTERVAL_MS: u64 = 5;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

/// How a finished session should be followed up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Restart,
    Quit,
}

pub struct SnakeGame {
    settings: Settings,
    playfield: Coords,
    held: bool,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(settings: Settings) -> Result<Self> {
        let term = TermManager::new().context("Failed to read terminal size")?;
        Ok(SnakeGame { settings, playfield: (0, 0), held: false, term })
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.playfield = self.settings.playfield(self.term.get_terminal_size())?;
        self.term.setup().context("Failed to set up terminal")?;

        info!("playfield is {}x{} cells", self.playfield.0, self.playfield.1);
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore().context("Failed to restore terminal")
    }

    /// Returns false if the player asked to quit.
    pub fn show_intro(&mut self) -> Result<bool> {
        let lines = &[
            "Arrow keys or WASD to move",
            "P to stop the snake, Space to grow",
            "Esc to hold",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;
        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;

        Ok(!is_ctrl_c(&key))
    }

    pub fn play(&mut self) -> Result<SessionEnd> {
        self.term.clear()?;
        self.term.draw_borders(self.playfield)?;
        self.held = false;

        let bounds = Bounds::from_cells(self.playfield.0, self.playfield.1)?;
        let mut state = match self.settings.seed {
            Some(seed) => GameState::with_seed(bounds, seed),
            None => GameState::new(bounds),
        };
        let mut throttle = Throttle::new(self.settings.tick_interval);

        self.draw(&state)?;

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                match map_key(&key_ev) {
                    KeyAction::Quit => return Ok(SessionEnd::Quit),
                    KeyAction::Hold => {
                        self.toggle_hold()?;
                        throttle.reset();
                    },
                    KeyAction::Game(command) if !self.held => state.handle_input(command),
                    _ => {}
                }
            }

            if self.held || !throttle.ready(Instant::now()) { continue; }

            let report = state.tick();
            self.draw(&state)?;

            if report.died {
                self.game_over(&state)?;
                break;
            }
        } // Game loop

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            Ok(SessionEnd::Quit)
        } else {
            info!("restarting");
            Ok(SessionEnd::Restart)
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw(&mut self, state: &GameState) -> Result<()> {
        let mut cells = vec![];

        if let Some(pos) = self.to_screen(&state.food().rect()) {
            cells.push((pos, FOOD_CHAR));
        }

        // Tail first so the head wins when cells overlap
        let snake = state.snake();
        let body: Vec<_> = snake.cells().collect();
        for cell in body.iter().rev() {
            if let Some(pos) = self.to_screen(&cell.rect) {
                let ch = if cell.is_head {head_char(snake)} else {SNAKE_BODY_CHAR};
                cells.push((pos, ch));
            }
        }

        self.term.draw_frame(&cells)?;
        self.term.draw_label(&format!(" Score: {} ", state.score()), self.playfield.0)?;
        Ok(())
    }

    fn game_over(&mut self, state: &GameState) -> Result<()> {
        let cells: Vec<_> = state.snake().cells()
            .filter_map(|cell| self.to_screen(&cell.rect))
            .map(|pos| (pos, DEAD_SNAKE_CHAR))
            .collect();
        self.term.draw_frame(&cells)?;

        info!("game over, score {}", state.score());
        self.term.show_message(&[
            "Game over!",
            &*format!("Score: {}", state.score()),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit."
        ])?;
        Ok(())
    }

    fn toggle_hold(&mut self) -> Result<()> {
        if !self.held {
            self.term.show_message(&["Holding", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.held = !self.held;
        info!("hold {}", if self.held {"on"} else {"off"});
        Ok(())
    }

    fn to_screen(&self, rect: &Rect) -> Option<Coords> {
        cell_on_screen(rect, self.playfield)
    }
}

/// Terminal position of the cell holding the rect's top left corner, or
/// None if it lies outside the playfield.
fn cell_on_screen(rect: &Rect, playfield: Coords) -> Option<Coords> {
    let col = rect.x.div_euclid(CELL_SIZE);
    let row = rect.y.div_euclid(CELL_SIZE);

    if col < 0 || row < 0 || col >= playfield.0 as i32 || row >= playfield.1 as i32 {
        return None;
    }

    Some((col as TermInt + 1, row as TermInt + 1))
}

fn head_char(snake: &Snake) -> char {
    match snake.direction() {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
        Paused => '@',
    }
}
