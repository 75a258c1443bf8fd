use std::sync::mpsc;

use super::{Outcome, Player};

/// Notifications emitted by [`GameEngine`](super::GameEngine) as a game
/// progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    NewGame { game_number: u32, first: Player },
    TurnChanged(Player),
    GameOver(Outcome),
}

/// Subscriber to engine events. This is the hook an automated player would
/// use to learn that it is its turn.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

impl GameObserver for mpsc::Sender<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.send(*event);
    }
}

impl GameEvent {
    /// Status line text for this event.
    pub fn status_text(&self) -> String {
        match self {
            GameEvent::NewGame { first, .. } | GameEvent::TurnChanged(first) => {
                format!("{}'s turn", first.name())
            }
            GameEvent::GameOver(Outcome::Win(player)) => {
                format!("Game Over: {} won", player.name())
            }
            GameEvent::GameOver(_) => "Game Over: Draw".to_string(),
        }
    }
}
