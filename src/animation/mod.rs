//! Tick-driven drop animation, decoupled from game rules and wall-clock time.

mod controller;
mod piece;

pub use controller::{AnimationConfig, AnimationController};
pub use piece::Piece;
