//! Turn order and card effects.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{Card, CardKind};
use crate::deck::draw;
use crate::game::{ActionRequired, GameState};

/// Direction of play around the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Seat after `current` going in `direction`.
///
/// ```
/// use uno_engine::turn::{next_index, Direction};
///
/// assert_eq!(next_index(3, 4, Direction::Clockwise), 0);
/// assert_eq!(next_index(0, 4, Direction::CounterClockwise), 3);
/// ```
pub fn next_index(current: usize, num_players: usize, direction: Direction) -> usize {
    match direction {
        Direction::Clockwise => (current + 1) % num_players,
        Direction::CounterClockwise => (current + num_players - 1) % num_players,
    }
}

/// Resolves `card`, which `player_index` has just played and which already
/// sits on top of the discard pile.
///
/// Draw penalties go to the next seat. If the deck runs dry they reshuffle
/// the discard pile underneath the played card, and the played card stays on
/// top. Wild plays leave the turn with `player_index` and require a color choice.
pub fn apply_effect(card: Card, mut state: GameState, player_index: usize) -> GameState {
    let n = state.num_players();
    let target = next_index(player_index, n, state.direction);
    let mut action_required = ActionRequired::Play;

    let next_player = match card.kind {
        CardKind::Number(_) => target,
        CardKind::Skip => {
            info!(player = %state.players[target].name, "skipped");
            next_index(target, n, state.direction)
        }
        CardKind::Reverse => {
            state.direction = state.direction.flipped();
            if n == 2 {
                info!(player = %state.players[target].name, "direction reversed, player skipped (2 players)");
                next_index(target, n, state.direction)
            } else {
                info!(direction = ?state.direction, "direction reversed");
                next_index(player_index, n, state.direction)
            }
        }
        CardKind::DrawTwo => {
            penalty_draw(&mut state, card, target, 2);
            next_index(target, n, state.direction)
        }
        CardKind::Wild => {
            info!(player = %state.players[player_index].name, "played Wild, must choose a color");
            action_required = ActionRequired::ChooseColor;
            player_index
        }
        CardKind::WildDrawFour => {
            penalty_draw(&mut state, card, target, 4);
            action_required = ActionRequired::ChooseColor;
            player_index
        }
    };

    if !card.is_wild() {
        state.current_color = card.color;
    }
    state.current_player_index = next_player;
    state.action_required = action_required;
    state
}

/// `target` draws `count` cards. The played card is lifted off the discard
/// pile for the draw so a reshuffle cannot bury it, then put back on top.
fn penalty_draw(state: &mut GameState, played: Card, target: usize, count: usize) {
    let mut rng = state.next_rng();
    let mut discard = std::mem::take(&mut state.discard_pile);
    let on_top = discard.pop();
    debug_assert_eq!(on_top, Some(played));

    let result = draw(std::mem::take(&mut state.deck), discard, count, &mut rng);
    info!(
        player = %state.players[target].name,
        requested = count,
        drawn = result.drawn.len(),
        "draws and is skipped"
    );
    state.players[target].hand.extend(result.drawn);
    state.deck = result.deck;
    state.discard_pile = result.discard_pile;
    state.discard_pile.extend(on_top);
}
