//! Wrap-around snake: the game core (`geometry`, `food`, `snake`, `state`)
//! plus the terminal host that drives it (`input`, `schedule`, `term`, `game`).

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod schedule;
pub mod snake;
pub mod state;
pub mod term;

pub type TermInt = u16;
pub type Coords = (u16, u16);
