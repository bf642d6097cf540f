use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SnakeError {
    #[error("canvas {width}x{height} is too small, both sides must exceed one cell")]
    InvalidBounds { width: i32, height: i32 },
    #[error("a snake needs at least one segment")]
    EmptyBody,
    #[error("terminal {width}x{height} is too small to hold a playfield")]
    TerminalTooSmall { width: u16, height: u16 },
    #[error("playfield {width}x{height} is too small, both sides need at least 2 cells")]
    InvalidPlayfield { width: u16, height: u16 },
    #[error("tick interval must be at least 1ms")]
    InvalidTickInterval,
}
