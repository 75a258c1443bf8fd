use log::debug;
use serde::{Deserialize, Serialize};

use super::Piece;
use crate::game::{Player, COLS, ROWS};

/// Board geometry and fall speed, in board pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Milliseconds between ticks in the render loop.
    pub tick_interval_ms: u64,
    /// Pixels a falling piece moves per tick.
    pub fall_step: i32,
    /// Width and height of one board cell.
    pub cell_size: i32,
    pub piece_radius: i32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            tick_interval_ms: 5,
            fall_step: 5,
            cell_size: 70,
            piece_radius: 32,
        }
    }
}

impl AnimationConfig {
    /// Resting centre of a piece on `row`.
    pub fn target_for_row(&self, row: usize) -> i32 {
        let row = i32::try_from(row).unwrap_or(i32::MAX);
        row.saturating_mul(self.cell_size)
            .saturating_add(self.cell_size / 2)
    }

    /// Where new pieces appear: fully above the top row.
    pub fn spawn_position(&self) -> i32 {
        -self.piece_radius
    }

    /// Map a horizontal pixel coordinate to a board column.
    pub fn column_at(&self, x: i32) -> Option<usize> {
        if x < 0 || self.cell_size <= 0 {
            return None;
        }
        let column = (x / self.cell_size) as usize;
        (column < COLS).then_some(column)
    }
}

/// Drives each dropped piece from above the board to its resting row, one
/// fixed step per [`tick`](Self::tick). Knows nothing about turns or wins.
#[derive(Debug, Clone)]
pub struct AnimationController {
    config: AnimationConfig,
    pieces: [[Option<Piece>; ROWS]; COLS],
    ticks: u64,
}

impl AnimationController {
    pub fn new(config: AnimationConfig) -> Self {
        AnimationController {
            config,
            pieces: [[None; ROWS]; COLS],
            ticks: 0,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Start a piece falling toward `(column, row)`. Out-of-range cells are
    /// ignored.
    pub fn spawn(&mut self, column: usize, row: usize, occupant: Player) {
        let start = self.config.spawn_position();
        let target = self.config.target_for_row(row);
        if let Some(slot) = self.pieces.get_mut(column).and_then(|col| col.get_mut(row)) {
            *slot = Some(Piece::new(occupant, start, target));
        }
    }

    /// Advance every falling piece by one step.
    pub fn tick(&mut self) {
        self.ticks += 1;
        let step = self.config.fall_step;
        for (column, slots) in self.pieces.iter_mut().enumerate() {
            for (row, piece) in slots.iter_mut().enumerate() {
                let Some(piece) = piece else { continue };
                if piece.advance(step) && piece.is_settled() {
                    debug!("piece at column {column}, row {row} settled on tick {}", self.ticks);
                }
            }
        }
    }

    /// Remove every piece, falling or settled.
    pub fn reset(&mut self) {
        self.pieces = [[None; ROWS]; COLS];
        self.ticks = 0;
    }

    pub fn piece(&self, column: usize, row: usize) -> Option<&Piece> {
        self.pieces.get(column)?.get(row)?.as_ref()
    }

    /// Current vertical position of the piece headed for `(column, row)`.
    pub fn position(&self, column: usize, row: usize) -> Option<i32> {
        self.piece(column, row).map(Piece::current)
    }

    pub fn is_settled(&self, column: usize, row: usize) -> bool {
        self.piece(column, row).is_some_and(Piece::is_settled)
    }

    /// Board row the piece is currently drawn over, or `None` while it is
    /// still above the board.
    pub fn display_row(&self, column: usize, row: usize) -> Option<usize> {
        let piece = self.piece(column, row)?;
        if piece.current() < 0 {
            return None;
        }
        if self.config.cell_size <= 0 {
            return Some(row);
        }
        let visual = (piece.current() / self.config.cell_size) as usize;
        Some(visual.min(row))
    }

    /// Every piece on the board, with its cell.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, &Piece)> {
        self.pieces.iter().enumerate().flat_map(|(column, slots)| {
            slots
                .iter()
                .enumerate()
                .filter_map(move |(row, piece)| piece.as_ref().map(|p| (column, row, p)))
        })
    }

    /// Number of pieces that have not reached their target yet.
    pub fn in_flight(&self) -> usize {
        self.pieces().filter(|(_, _, p)| !p.is_settled()).count()
    }

    pub fn all_settled(&self) -> bool {
        self.in_flight() == 0
    }

    /// Ticks since the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}
