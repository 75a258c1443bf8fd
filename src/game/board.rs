use std::fmt;

use super::{Outcome, Player};
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Run length that wins the game.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The four lines a run can lie on. Each is scanned in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Top-left to bottom-right (`\`)
    DiagonalDown,
    /// Bottom-left to top-right (`/`)
    DiagonalUp,
}

impl Axis {
    /// Scan order used by win detection.
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Column/row step for one direction along the axis; the opposite
    /// direction is the negation. Rows grow downward.
    fn step(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (0, 1),
            Axis::Horizontal => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// Column-major grid: `cells[column][row]`, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom.
    ///
    /// Panics if `column >= COLS` or `row >= ROWS`; use [`Board::try_get`]
    /// for unchecked input.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    /// Like [`Board::get`] but returns `None` outside the grid.
    pub fn try_get(&self, column: usize, row: usize) -> Option<Cell> {
        self.cells.get(column)?.get(row).copied()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        !self.cells[column][0].is_empty()
    }

    /// Lowest empty row of a column, scanning from the bottom up.
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        let col = self.cells.get(column)?;
        (0..ROWS).rev().find(|&row| col[row].is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        let row = self
            .lowest_empty_row(column)
            .ok_or(MoveError::ColumnFull(column))?;
        self.cells[column][row] = player.to_cell();
        Ok(row)
    }

    /// Number of occupied cells in a column. Out-of-range columns are empty.
    pub fn column_height(&self, column: usize) -> usize {
        self.cells
            .get(column)
            .map_or(0, |col| col.iter().filter(|c| !c.is_empty()).count())
    }

    /// Total number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        (0..COLS).map(|col| self.column_height(col)).sum()
    }

    /// A full top row means a full board, since columns fill bottom-up.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.cells[col][0].is_empty())
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; ROWS]; COLS];
    }

    /// Length of the run of `player` pieces through `(column, row)` along
    /// `axis`, counting the anchor cell itself.
    pub fn run_length(&self, column: usize, row: usize, axis: Axis, player: Player) -> usize {
        let (dc, dr) = axis.step();
        1 + self.count_direction(column, row, dc, dr, player)
            + self.count_direction(column, row, -dc, -dr, player)
    }

    fn count_direction(
        &self,
        column: usize,
        row: usize,
        dc: isize,
        dr: isize,
        player: Player,
    ) -> usize {
        let mut count = 0;
        let (mut c, mut r) = (column, row);
        loop {
            // checked_add_signed stops at the left/top edge; try_get at the right/bottom
            let (Some(nc), Some(nr)) = (c.checked_add_signed(dc), r.checked_add_signed(dr)) else {
                break;
            };
            match self.try_get(nc, nr) {
                Some(Cell::Taken(p)) if p == player => {
                    count += 1;
                    c = nc;
                    r = nr;
                }
                _ => break,
            }
        }
        count
    }

    /// First axis, in [`Axis::ALL`] order, on which the piece at
    /// `(column, row)` completes a winning run.
    pub fn winning_axis(&self, column: usize, row: usize) -> Option<Axis> {
        let player = self.try_get(column, row)?.occupant()?;
        Axis::ALL
            .into_iter()
            .find(|&axis| self.run_length(column, row, axis, player) >= WIN_LENGTH)
    }

    /// Evaluate the board after a piece landed at `(column, row)`.
    /// A win is checked before a draw, so a winning last piece is a win.
    pub fn evaluate(&self, column: usize, row: usize) -> Outcome {
        if self.winning_axis(column, row).is_some() {
            if let Some(player) = self.get(column, row).occupant() {
                return Outcome::Win(player);
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            let line: String = (0..COLS)
                .map(|col| match self.get(col, row) {
                    Cell::Empty => '.',
                    Cell::Taken(Player::One) => 'R',
                    Cell::Taken(Player::Two) => 'Y',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
