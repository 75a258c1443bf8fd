use serde::Serialize;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player who moves first in the given game. Odd games open with
    /// Player One, even games with Player Two.
    pub fn first_for_game(game_number: u32) -> Player {
        if game_number % 2 == 1 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Taken(self)
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Red",
            Player::Two => "Yellow",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
