use crate::game::Player;

/// A dropped piece on its way down. Positions are vertical centre
/// coordinates in board pixels, growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    current: i32,
    target: i32,
    occupant: Player,
}

impl Piece {
    pub fn new(occupant: Player, start: i32, target: i32) -> Self {
        Piece {
            current: start.min(target),
            target,
            occupant,
        }
    }

    /// Move toward the target by `step`, never past it.
    /// Returns true if the piece moved.
    pub fn advance(&mut self, step: i32) -> bool {
        if self.is_settled() {
            return false;
        }
        self.current = self.current.saturating_add(step).min(self.target);
        true
    }

    pub fn is_settled(&self) -> bool {
        self.current >= self.target
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn occupant(&self) -> Player {
        self.occupant
    }
}
