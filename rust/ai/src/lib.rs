//! # uno-ai: Computer Opponents for Uno
//!
//! Opponents read a [`GameState`] snapshot and answer with the
//! [`PlayerAction`] they want to submit; they never mutate the state and the
//! engine stays the only authority on legality.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`baseline`] - Scripted opponent: first legal card, otherwise draw
//! - [`advisor`] - Move suggestions with a reason, and an opponent that follows them
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use uno_ai::{create_ai, AIOpponent};
//! use uno_engine::engine::{apply_action, initialize_game_with_seed};
//!
//! let ai = create_ai("baseline").unwrap();
//! let state = initialize_game_with_seed(&["Ann", "Bot"], 42).unwrap();
//! let me = state.current_player_index;
//! let action = ai.get_action(&state, me);
//! let next = apply_action(&state, me, action).unwrap();
//! assert_eq!(next.total_cards(), 108);
//! ```

use uno_engine::cards::{all_colors, Card, Color};
use uno_engine::game::GameState;
use uno_engine::player::PlayerAction;

pub mod advisor;
pub mod baseline;

/// Kinds accepted by [`create_ai`].
pub const AI_KINDS: [&str; 2] = ["baseline", "advisor"];

/// Interface for computer opponents.
///
/// # Example Implementation
///
/// ```rust
/// use uno_ai::AIOpponent;
/// use uno_engine::game::GameState;
/// use uno_engine::player::PlayerAction;
///
/// struct AlwaysDraw;
///
/// impl AIOpponent for AlwaysDraw {
///     fn get_action(&self, _state: &GameState, _player_index: usize) -> PlayerAction {
///         PlayerAction::Draw
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysDraw"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Action for `player_index` given the current snapshot.
    ///
    /// Only meaningful while it is that player's turn and the game is not
    /// over; otherwise the returned action is rejected by the engine.
    fn get_action(&self, state: &GameState, player_index: usize) -> PlayerAction;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

/// Factory function to create AI opponents by kind.
///
/// ```rust
/// use uno_ai::create_ai;
///
/// assert_eq!(create_ai("baseline").unwrap().name(), "BaselineAI");
/// assert_eq!(create_ai("advisor").unwrap().name(), "AdvisorAI");
/// assert!(create_ai("oracle").is_err());
/// ```
///
/// # Errors
///
/// Returns a message naming the accepted kinds when `kind` is unknown.
pub fn create_ai(kind: &str) -> Result<Box<dyn AIOpponent>, String> {
    match kind {
        "baseline" => Ok(Box::new(baseline::BaselineAI::new())),
        "advisor" => Ok(Box::new(advisor::AdvisorAI::new())),
        other => Err(format!(
            "Unknown AI type: {} (expected one of: {})",
            other,
            AI_KINDS.join(", ")
        )),
    }
}

/// Color held most often in `hand`, ignoring wild cards.
///
/// Ties go to the earlier color in Red, Green, Blue, Yellow order; a hand
/// with no colored cards yields Red.
pub fn preferred_color(hand: &[Card]) -> Color {
    let mut best = Color::Red;
    let mut best_count = 0;
    for color in all_colors() {
        let count = hand.iter().filter(|c| c.color == color).count();
        if count > best_count {
            best = color;
            best_count = count;
        }
    }
    best
}
