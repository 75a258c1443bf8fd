use serde::Serialize;

use super::Player;

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "winner", rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    /// True for a win or a draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Turn bookkeeping for the game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub current_turn: Player,
    pub game_number: u32,
    pub is_over: bool,
}

impl GameState {
    /// State of a freshly started game.
    pub fn starting(game_number: u32) -> Self {
        GameState {
            current_turn: Player::first_for_game(game_number),
            game_number,
            is_over: false,
        }
    }
}

/// An accepted move: where the piece landed and what it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub player: Player,
    pub outcome: Outcome,
}
