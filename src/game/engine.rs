use log::{debug, info};

use super::{Board, Cell, GameEvent, GameObserver, GameState, Outcome, Placement, Player, COLS};
use crate::error::MoveError;

/// Single source of truth for board occupancy and turn order.
///
/// Moves take `&mut self` and run to completion, so a move is fully
/// resolved (turn switched or game ended) before the next one is accepted.
pub struct GameEngine {
    board: Board,
    state: GameState,
    outcome: Option<Outcome>,
    move_count: usize,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Create an engine with game 1 already started (Player One opens).
    pub fn new() -> Self {
        let mut engine = GameEngine {
            board: Board::new(),
            state: GameState::starting(0),
            outcome: None,
            move_count: 0,
            observers: Vec::new(),
        };
        engine.start_new_game();
        engine
    }

    /// Register an observer for new-game, turn and game-over events.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Start the next game. Callable at any time, mid-game included.
    pub fn start_new_game(&mut self) {
        self.state = GameState::starting(self.state.game_number + 1);
        self.board.clear();
        self.outcome = None;
        self.move_count = 0;

        let first = self.state.current_turn;
        info!("game {} started, {} moves first", self.state.game_number, first);
        self.emit(GameEvent::NewGame {
            game_number: self.state.game_number,
            first,
        });
        self.emit(GameEvent::TurnChanged(first));
    }

    /// Drop a piece for the current player, rejecting the move with a reason
    /// if it cannot be played. A rejected move changes nothing.
    pub fn try_move(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.state.is_over {
            return Err(MoveError::GameOver);
        }

        let player = self.state.current_turn;
        let row = self.board.drop_piece(column, player)?;
        self.move_count += 1;
        let outcome = self.board.evaluate(column, row);
        debug!("{player} dropped into column {column}, landed on row {row}: {outcome:?}");

        if outcome.is_terminal() {
            self.state.is_over = true;
            self.outcome = Some(outcome);
            info!(
                "game {} over after {} moves: {outcome:?}",
                self.state.game_number, self.move_count
            );
            self.emit(GameEvent::GameOver(outcome));
        } else {
            self.state.current_turn = player.other();
            self.emit(GameEvent::TurnChanged(self.state.current_turn));
        }

        Ok(Placement {
            column,
            row,
            player,
            outcome,
        })
    }

    /// Drop a piece for the current player. Invalid moves (column out of
    /// range, full column, finished game) are ignored and report
    /// [`Outcome::InProgress`].
    pub fn apply_move(&mut self, column: usize) -> Outcome {
        match self.try_move(column) {
            Ok(placement) => placement.outcome,
            Err(err) => {
                debug!("move ignored: {err}");
                Outcome::InProgress
            }
        }
    }

    /// Evaluate the board around `(column, row)` for the piece there.
    pub fn evaluate(&self, column: usize, row: usize) -> Outcome {
        self.board.evaluate(column, row)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Panics outside the 7x6 grid, like [`Board::get`].
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.board.get(column, row)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_turn(&self) -> Player {
        self.state.current_turn
    }

    pub fn game_number(&self) -> u32 {
        self.state.game_number
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    /// Terminal outcome of the current game, once it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Moves played in the current game.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns that would accept a piece right now.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.state.is_over {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("outcome", &self.outcome)
            .field("move_count", &self.move_count)
            .field("observers", &self.observers.len())
            .finish()
    }
}
