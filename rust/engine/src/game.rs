use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card, Color, DECK_SIZE};
use crate::deck::rng_for_stream;
use crate::errors::IntegrityError;
use crate::player::Player;
use crate::turn::Direction;

/// What the engine expects next from the current player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionRequired {
    /// Play a card (or draw)
    Play,
    /// Name the color after a wild
    ChooseColor,
    /// Terminal; `current_player_index` is the winner
    GameOver,
}

impl fmt::Display for ActionRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionRequired::Play => "play",
            ActionRequired::ChooseColor => "chooseColor",
            ActionRequired::GameOver => "gameOver",
        };
        f.write_str(s)
    }
}

/// Snapshot of a whole game. Engine operations take a snapshot by reference
/// and return a fresh one; a snapshot is never changed behind the caller's back.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order
    pub players: Vec<Player>,
    /// Draw pile, top is the last element
    pub deck: Vec<Card>,
    /// Discard pile, top is the last element
    pub discard_pile: Vec<Card>,
    pub current_player_index: usize,
    pub direction: Direction,
    /// Color a non-wild play must match; never `Color::Wild`
    pub current_color: Color,
    pub action_required: ActionRequired,
    /// Seed of the opening shuffle
    pub seed: u64,
    /// Stream used by the next reshuffle
    pub rng_stream: u64,
}

impl GameState {
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn is_over(&self) -> bool {
        self.action_required == ActionRequired::GameOver
    }

    pub fn winner(&self) -> Option<usize> {
        self.is_over().then_some(self.current_player_index)
    }

    /// Cards across deck, discard pile and every hand.
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.discard_pile.len()
            + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
    }

    /// Consumes the current reshuffle stream and hands back a generator for it.
    pub(crate) fn next_rng(&mut self) -> rand_chacha::ChaCha20Rng {
        let rng = rng_for_stream(self.seed, self.rng_stream);
        self.rng_stream += 1;
        rng
    }

    /// Verifies card conservation and the basic shape of the snapshot.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let actual = self.total_cards();
        if actual != DECK_SIZE {
            return Err(IntegrityError::CardCount {
                expected: DECK_SIZE,
                actual,
            });
        }
        if count_cards(self.all_cards()) != count_cards(full_deck().into_iter()) {
            return Err(IntegrityError::Composition);
        }
        if self.discard_pile.is_empty() {
            return Err(IntegrityError::EmptyDiscard);
        }
        if self.current_color.is_wild() {
            return Err(IntegrityError::WildCurrentColor);
        }
        if self.current_player_index >= self.players.len() {
            return Err(IntegrityError::PlayerIndexOutOfRange {
                index: self.current_player_index,
                players: self.players.len(),
            });
        }
        Ok(())
    }

    fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.deck
            .iter()
            .chain(self.discard_pile.iter())
            .chain(self.players.iter().flat_map(|p| p.hand.iter()))
            .copied()
    }
}

fn count_cards(cards: impl Iterator<Item = Card>) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for c in cards {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
