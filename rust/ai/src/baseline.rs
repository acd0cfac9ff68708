//! Scripted opponent used for simulations and as the default CLI opponent.

use tracing::debug;
use uno_engine::game::{ActionRequired, GameState};
use uno_engine::player::PlayerAction;
use uno_engine::rules::playable_indices;

use crate::{preferred_color, AIOpponent};

/// Plays the first playable card in hand order and draws when nothing fits.
/// After a wild it names the color it holds most.
///
/// Deterministic: the same snapshot always yields the same action.
///
/// ```rust
/// use uno_ai::baseline::BaselineAI;
/// use uno_ai::AIOpponent;
/// use uno_engine::engine::initialize_game_with_seed;
///
/// let ai = BaselineAI::new();
/// let state = initialize_game_with_seed(&["A", "B", "C"], 9).unwrap();
/// let me = state.current_player_index;
/// assert_eq!(ai.get_action(&state, me), ai.get_action(&state, me));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }
}

impl AIOpponent for BaselineAI {
    fn get_action(&self, state: &GameState, player_index: usize) -> PlayerAction {
        let Some(player) = state.players.get(player_index) else {
            return PlayerAction::Draw;
        };
        match state.action_required {
            ActionRequired::ChooseColor => PlayerAction::ChooseColor(preferred_color(&player.hand)),
            ActionRequired::Play | ActionRequired::GameOver => {
                let Some(top) = state.top_card() else {
                    return PlayerAction::Draw;
                };
                match playable_indices(&player.hand, top, state.current_color).first() {
                    Some(&hand_index) => PlayerAction::Play { hand_index },
                    None => {
                        debug!(player = %player.name, "no playable card, drawing");
                        PlayerAction::Draw
                    }
                }
            }
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uno_engine::cards::{Card, Color};
    use uno_engine::engine::initialize_game_with_seed;

    fn with_hand(hand: Vec<Card>, top: Card, color: Color) -> GameState {
        let mut state = initialize_game_with_seed(&["A", "B"], 1).unwrap();
        state.players[0].hand = hand;
        state.discard_pile = vec![top];
        state.current_color = color;
        state.current_player_index = 0;
        state.action_required = ActionRequired::Play;
        state
    }

    #[test]
    fn plays_the_first_playable_card() {
        let state = with_hand(
            vec![
                Card::number(Color::Blue, 1),
                Card::number(Color::Red, 2),
                Card::wild(),
            ],
            Card::number(Color::Red, 9),
            Color::Red,
        );
        assert_eq!(
            BaselineAI::new().get_action(&state, 0),
            PlayerAction::Play { hand_index: 1 }
        );
    }

    #[test]
    fn draws_without_a_playable_card() {
        let state = with_hand(
            vec![Card::number(Color::Blue, 1)],
            Card::number(Color::Red, 9),
            Color::Red,
        );
        assert_eq!(BaselineAI::new().get_action(&state, 0), PlayerAction::Draw);
    }

    #[test]
    fn names_the_most_held_color() {
        let mut state = with_hand(
            vec![
                Card::number(Color::Yellow, 1),
                Card::number(Color::Yellow, 2),
                Card::number(Color::Red, 2),
            ],
            Card::wild(),
            Color::Red,
        );
        state.action_required = ActionRequired::ChooseColor;
        assert_eq!(
            BaselineAI::new().get_action(&state, 0),
            PlayerAction::ChooseColor(Color::Yellow)
        );
    }

    #[test]
    fn test_baseline_ai_default() {
        let ai = BaselineAI;
        assert_eq!(ai.name(), "BaselineAI");
    }
}
