//! A game table: one engine plus the animation of its pieces, kept in step.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::animation::AnimationController;
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameEngine, GameObserver, Outcome, Placement};

/// Rules for when the table accepts input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Reject drops while an earlier piece is still falling.
    pub wait_for_settle: bool,
}

/// Owns the engine and the animation controller. Accepted placements flow
/// from the engine to the controller; nothing flows back.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    animation: AnimationController,
    play: PlayConfig,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Session {
            engine: GameEngine::new(),
            animation: AnimationController::new(config.animation.clone()),
            play: config.play.clone(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.engine.subscribe(observer);
    }

    /// Reset animation and board together and start the next game.
    pub fn start_new_game(&mut self) {
        self.animation.reset();
        self.engine.start_new_game();
    }

    /// Play `column` for the current player and start its piece falling.
    pub fn try_move(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.play.wait_for_settle && !self.animation.all_settled() {
            return Err(MoveError::PieceInFlight);
        }
        let placement = self.engine.try_move(column)?;
        self.animation
            .spawn(placement.column, placement.row, placement.player);
        Ok(placement)
    }

    /// Like [`Session::try_move`], with rejected moves ignored.
    pub fn apply_move(&mut self, column: usize) -> Outcome {
        match self.try_move(column) {
            Ok(placement) => placement.outcome,
            Err(err) => {
                debug!("move ignored: {err}");
                Outcome::InProgress
            }
        }
    }

    /// Play the column under horizontal board pixel `x`.
    pub fn apply_move_at(&mut self, x: i32) -> Outcome {
        match self.animation.config().column_at(x) {
            Some(column) => self.apply_move(column),
            None => {
                debug!("click at x={x} is outside the board");
                Outcome::InProgress
            }
        }
    }

    pub fn tick(&mut self) {
        self.animation.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};

    #[test]
    fn test_accepted_move_spawns_piece() {
        let mut session = Session::new(&AppConfig::default());
        session.apply_move(4);
        let piece = session.animation().piece(4, 5).unwrap();
        assert_eq!(piece.occupant(), Player::One);
        assert_eq!(piece.target(), 385);
        assert!(!piece.is_settled());
    }

    #[test]
    fn test_rejected_move_spawns_nothing() {
        let mut session = Session::new(&AppConfig::default());
        session.apply_move(9);
        assert_eq!(session.animation().pieces().count(), 0);
    }

    #[test]
    fn test_apply_move_at_maps_pixels() {
        let mut session = Session::new(&AppConfig::default());
        session.apply_move_at(145);
        assert_eq!(session.engine().cell(2, 5), Cell::Taken(Player::One));
        assert_eq!(session.apply_move_at(10_000), Outcome::InProgress);
        assert_eq!(session.apply_move_at(-5), Outcome::InProgress);
        assert_eq!(session.engine().move_count(), 1);
    }

    #[test]
    fn test_wait_for_settle_blocks_until_landed() {
        let mut config = AppConfig::default();
        config.play.wait_for_settle = true;
        config.animation.fall_step = 1000;
        let mut session = Session::new(&config);

        session.try_move(0).unwrap();
        assert_eq!(session.try_move(1), Err(MoveError::PieceInFlight));
        assert_eq!(session.engine().current_turn(), Player::Two);

        session.tick();
        assert!(session.try_move(1).is_ok());
    }

    #[test]
    fn test_unvalidated_huge_geometry_does_not_panic() {
        let mut config = AppConfig::default();
        config.animation.cell_size = 1_000_000_000;
        config.animation.piece_radius = 1;
        let mut session = Session::new(&config);
        assert_eq!(session.apply_move(0), Outcome::InProgress);
        assert_eq!(session.animation().piece(0, 5).unwrap().target(), i32::MAX);
        session.tick();
        assert_eq!(session.animation().display_row(0, 5), Some(0));
    }

    #[test]
    fn test_new_game_resets_animation() {
        let mut session = Session::new(&AppConfig::default());
        session.apply_move(0);
        session.apply_move(0);
        session.tick();
        session.start_new_game();
        assert_eq!(session.animation().pieces().count(), 0);
        assert_eq!(session.engine().move_count(), 0);
    }
}
