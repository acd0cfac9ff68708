//! Move advice for a hand, with a human readable reason.
//!
//! The advisor is read-only: it only looks at a hand, the top card and the
//! active color, and never touches game state. [`AdvisorAI`] is an opponent
//! that simply follows the advice.

use serde::Serialize;
use uno_engine::cards::{Card, CardKind, Color};
use uno_engine::game::{ActionRequired, GameState};
use uno_engine::player::PlayerAction;
use uno_engine::rules::is_playable;
use uno_engine::turn::next_index;

use crate::{preferred_color, AIOpponent};

/// Suggested card (if any) and why.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MoveSuggestion {
    /// Card to play, `None` when nothing in hand is playable
    pub card: Option<Card>,
    /// Position of `card` in the hand
    pub hand_index: Option<usize>,
    pub reason: String,
}

/// Lower ranks are better plays.
fn rank(card: &Card, current_color: Color) -> (u8, u8) {
    match card.kind {
        CardKind::DrawTwo => (0, 0),
        CardKind::Skip => (1, 0),
        CardKind::Reverse => (2, 0),
        // higher numbers first: shed points while keeping the color
        CardKind::Number(v) if card.color == current_color => (3, 9u8.saturating_sub(v)),
        CardKind::Number(v) => (4, 9u8.saturating_sub(v)),
        CardKind::Wild => (5, 0),
        CardKind::WildDrawFour => (6, 0),
    }
}

/// Picks the best playable card for `current_name`.
///
/// Disruptive action cards aimed at `next_name` come first, then numbers
/// that keep the active color, then numbers that change it. Wild cards are
/// kept for last since they fit anywhere. Ties go to the earlier card in hand.
///
/// ```rust
/// use uno_ai::advisor::suggest_move;
/// use uno_engine::cards::{Card, Color};
///
/// let hand = [Card::wild(), Card::number(Color::Red, 3), Card::skip(Color::Red)];
/// let top = Card::number(Color::Red, 8);
/// let s = suggest_move(&hand, &top, Color::Red, "Ann", "Bo");
/// assert_eq!(s.card, Some(Card::skip(Color::Red)));
/// assert_eq!(s.hand_index, Some(2));
/// assert!(s.reason.contains("Bo"));
/// ```
pub fn suggest_move(
    hand: &[Card],
    top: &Card,
    current_color: Color,
    current_name: &str,
    next_name: &str,
) -> MoveSuggestion {
    let best = hand
        .iter()
        .enumerate()
        .filter(|(_, c)| is_playable(c, top, current_color))
        .min_by_key(|(i, c)| (rank(c, current_color), *i));

    let Some((index, &card)) = best else {
        return MoveSuggestion {
            card: None,
            hand_index: None,
            reason: format!(
                "{} has nothing that matches {} on {}, so the only move is to draw",
                current_name, top, current_color
            ),
        };
    };

    let reason = match card.kind {
        CardKind::DrawTwo => format!("{} makes {} draw two cards and miss a turn", card, next_name),
        CardKind::Skip => format!("{} skips {} before they can get rid of cards", card, next_name),
        CardKind::Reverse => format!("{} turns play away from {}", card, next_name),
        CardKind::Number(v) if card.color == current_color => {
            format!("{} keeps the color on {} and sheds a {}", card, current_color, v)
        }
        CardKind::Number(_) => format!("{} matches {} and switches the color to {}", card, top, card.color),
        CardKind::Wild => {
            let color = preferred_color(hand);
            format!("no colored card fits, so Wild lets {} switch to {}", current_name, color)
        }
        CardKind::WildDrawFour => format!(
            "Wild Draw Four is the only playable card and makes {} draw four",
            next_name
        ),
    };

    MoveSuggestion {
        card: Some(card),
        hand_index: Some(index),
        reason,
    }
}

/// Opponent that plays whatever [`suggest_move`] recommends.
#[derive(Debug, Clone, Default)]
pub struct AdvisorAI;

impl AdvisorAI {
    pub fn new() -> Self {
        Self
    }

    /// Advice for `player_index` on the given snapshot.
    pub fn advise(&self, state: &GameState, player_index: usize) -> Option<MoveSuggestion> {
        let player = state.players.get(player_index)?;
        let top = state.top_card()?;
        let next = next_index(player_index, state.num_players(), state.direction);
        Some(suggest_move(
            &player.hand,
            top,
            state.current_color,
            &player.name,
            &state.players[next].name,
        ))
    }
}

impl AIOpponent for AdvisorAI {
    fn get_action(&self, state: &GameState, player_index: usize) -> PlayerAction {
        if state.action_required == ActionRequired::ChooseColor {
            let hand = state
                .players
                .get(player_index)
                .map(|p| p.hand.as_slice())
                .unwrap_or(&[]);
            return PlayerAction::ChooseColor(preferred_color(hand));
        }
        match self.advise(state, player_index).and_then(|s| s.hand_index) {
            Some(hand_index) => PlayerAction::Play { hand_index },
            None => PlayerAction::Draw,
        }
    }

    fn name(&self) -> &str {
        "AdvisorAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(v: u8) -> Card {
        Card::number(Color::Red, v)
    }

    #[test]
    fn nothing_playable_means_draw() {
        let hand = [Card::number(Color::Blue, 1), Card::skip(Color::Green)];
        let s = suggest_move(&hand, &red(5), Color::Red, "Ann", "Bo");
        assert_eq!(s.card, None);
        assert_eq!(s.hand_index, None);
        assert!(s.reason.contains("draw"));
        assert!(s.reason.contains("Ann"));
    }

    #[test]
    fn ranking_tolerates_values_past_nine() {
        let odd = Card {
            color: Color::Red,
            kind: CardKind::Number(12),
        };
        let hand = [red(3), odd];
        let s = suggest_move(&hand, &red(5), Color::Red, "Ann", "Bo");
        // ranks as a high number, ahead of the 3
        assert_eq!(s.hand_index, Some(1));
    }

    #[test]
    fn draw_two_beats_skip_and_reverse() {
        let hand = [
            Card::reverse(Color::Red),
            Card::skip(Color::Red),
            Card::draw_two(Color::Red),
        ];
        let s = suggest_move(&hand, &red(5), Color::Red, "Ann", "Bo");
        assert_eq!(s.hand_index, Some(2));
        assert!(s.reason.contains("draw two"));
    }

    #[test]
    fn same_color_numbers_come_before_color_changes_and_high_before_low() {
        let hand = [
            Card::number(Color::Blue, 5),
            red(2),
            red(8),
        ];
        let s = suggest_move(&hand, &red(5), Color::Red, "Ann", "Bo");
        assert_eq!(s.card, Some(red(8)));
        assert!(s.reason.contains("keeps the color"));

        let s = suggest_move(&hand[..1], &red(5), Color::Red, "Ann", "Bo");
        assert_eq!(s.card, Some(Card::number(Color::Blue, 5)));
        assert!(s.reason.contains("switches the color to Blue"));
    }

    #[test]
    fn wilds_are_kept_for_last() {
        let hand = [Card::wild_draw_four(), Card::wild(), Card::number(Color::Green, 1)];
        let s = suggest_move(&hand, &red(5), Color::Red, "Ann", "Bo");
        assert_eq!(s.card, Some(Card::wild()));
        assert!(s.reason.contains("Green"));

        let s = suggest_move(&hand[..1], &red(5), Color::Red, "Ann", "Bo");
        assert_eq!(s.card, Some(Card::wild_draw_four()));
        assert!(s.reason.contains("Bo draw four"));
    }

    #[test]
    fn advice_respects_the_active_color_after_a_wild() {
        let hand = [red(3), Card::number(Color::Yellow, 3)];
        let s = suggest_move(&hand, &Card::wild(), Color::Yellow, "Ann", "Bo");
        assert_eq!(s.hand_index, Some(1));
    }
}
