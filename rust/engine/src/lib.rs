//! # uno-engine: Uno Rules Engine Core
//!
//! Authoritative game state and rule enforcement for multiplayer Uno.
//! Every operation is a pure transition from one [`game::GameState`] snapshot
//! to the next; shuffles are driven by a seed carried in the state, so the
//! same snapshot and input always produce the same result.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card vocabulary (Color, CardKind, Card) and the 108-card deck
//! - [`deck`] - Shuffling, dealing and drawing with discard-pile recycling
//! - [`rules`] - Playability checks
//! - [`turn`] - Turn order and card effects
//! - [`game`] - The game state snapshot
//! - [`engine`] - Initialization and the play / choose color / draw operations
//! - [`player`] - Players and the actions they submit
//! - [`logger`] - Game records and JSONL logging
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use uno_engine::engine::{handle_draw, initialize_game_with_seed, play_card};
//! use uno_engine::game::ActionRequired;
//! use uno_engine::rules::playable_indices;
//!
//! let state = initialize_game_with_seed(&["Alice", "Bob"], 7).unwrap();
//! if state.action_required == ActionRequired::Play {
//!     let me = state.current_player_index;
//!     let top = state.top_card().unwrap();
//!     let moves = playable_indices(&state.players[me].hand, top, state.current_color);
//!     let next = match moves.first() {
//!         Some(&i) => play_card(&state, me, i).unwrap(),
//!         None => handle_draw(&state, me).unwrap(),
//!     };
//!     assert_eq!(next.total_cards(), 108);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Illegal requests come back as [`errors::GameError`] and leave the caller's
//! snapshot untouched:
//!
//! ```rust
//! use uno_engine::engine::{initialize_game_with_seed, play_card};
//! use uno_engine::errors::{ErrorKind, GameError};
//!
//! let state = initialize_game_with_seed(&["Alice", "Bob", "Carol"], 1).unwrap();
//! let someone_else = (state.current_player_index + 1) % 3;
//! let err = play_card(&state, someone_else, 0).unwrap_err();
//! assert!(matches!(err, GameError::NotPlayersTurn { .. }));
//! assert_eq!(err.kind(), ErrorKind::TurnViolation);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod turn;
