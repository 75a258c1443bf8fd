//! Core Connect Four game logic: board representation, players, outcome
//! evaluation and the engine that sequences turns.

mod board;
mod engine;
mod events;
mod player;
mod state;

pub use board::{Axis, Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use engine::GameEngine;
pub use events::{GameEvent, GameObserver};
pub use player::Player;
pub use state::{GameState, Outcome, Placement};
