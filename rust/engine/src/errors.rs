use thiserror::Error;

use crate::cards::{Card, Color};
use crate::game::ActionRequired;

/// Broad category of a [`GameError`], used by callers deciding how to react
/// (abort setup, re-prompt the player, ignore an out-of-turn input).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    SetupFailure,
    TurnViolation,
    ActionMismatch,
    InvalidSelection,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Uno requires at least 2 players (got {count})")]
    NotEnoughPlayers { count: usize },
    #[error("Deck ran out of cards during initial deal ({missing} short)")]
    DeckShortOnDeal { missing: usize },
    #[error("Could not start game: deck exhausted before a starting card was found")]
    NoStartingCard,
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Cannot {attempted} now. Required action: {required}")]
    ActionMismatch {
        required: ActionRequired,
        attempted: &'static str,
    },
    #[error("Invalid card index {index} (hand has {hand_size} cards)")]
    InvalidCardIndex { index: usize, hand_size: usize },
    #[error("Card [{card}] cannot be played on [{top}] with current color {color}")]
    CardNotPlayable { card: Card, top: Card, color: Color },
    #[error("Cannot choose Wild as the color")]
    WildColorChoice,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NotEnoughPlayers { .. }
            | GameError::DeckShortOnDeal { .. }
            | GameError::NoStartingCard => ErrorKind::SetupFailure,
            GameError::NotPlayersTurn { .. } => ErrorKind::TurnViolation,
            GameError::ActionMismatch { .. } => ErrorKind::ActionMismatch,
            GameError::InvalidCardIndex { .. }
            | GameError::CardNotPlayable { .. }
            | GameError::WildColorChoice => ErrorKind::InvalidSelection,
        }
    }
}

/// Structural problems found by [`crate::game::GameState::check_integrity`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("Card count mismatch: {actual} cards in play, expected {expected}")]
    CardCount { expected: usize, actual: usize },
    #[error("Card multiset differs from a full deck")]
    Composition,
    #[error("Discard pile is empty")]
    EmptyDiscard,
    #[error("Current color must not be Wild")]
    WildCurrentColor,
    #[error("Current player index {index} out of range for {players} players")]
    PlayerIndexOutOfRange { index: usize, players: usize },
}
