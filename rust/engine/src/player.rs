use crate::cards::{Card, Color};
use serde::{Deserialize, Serialize};

/// An action a player can submit to the engine.
/// `Draw` is always initiated by the player; the engine never demands it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play the card at this position in the player's hand
    Play { hand_index: usize },
    /// Name the active color after a wild
    ChooseColor(Color),
    /// Take one card from the deck
    Draw,
}

/// A seat at the table. Membership and seat order never change during a game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier (`player-1`, `player-2`, ...)
    pub id: String,
    /// Display name
    pub name: String,
    /// Cards held; order only matters for indexing within a turn
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(seat: usize, name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            id: format!("player-{}", seat + 1),
            name: name.into(),
            hand,
        }
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// One card left. Informational only; nothing is enforced.
    pub fn has_uno(&self) -> bool {
        self.hand.len() == 1
    }
}
