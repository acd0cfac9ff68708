#![allow(dead_code)]

use uno_engine::cards::{full_deck, Card, Color};
use uno_engine::game::{ActionRequired, GameState};
use uno_engine::player::Player;
use uno_engine::turn::Direction;

/// Builds a state with the given hands and discard pile; every other card of
/// a full deck goes to the draw pile (in construction order, so the top of
/// the deck is a Wild Draw Four). Player 0 is to play, clockwise.
pub fn scenario(hands: Vec<Vec<Card>>, discard: Vec<Card>, color: Color) -> GameState {
    let mut deck = full_deck();
    for c in hands.iter().flatten().chain(discard.iter()) {
        let pos = deck
            .iter()
            .position(|d| d == c)
            .expect("scenario uses more copies of a card than a deck holds");
        deck.remove(pos);
    }
    let players = hands
        .into_iter()
        .enumerate()
        .map(|(i, h)| Player::new(i, format!("P{}", i), h))
        .collect();
    GameState {
        players,
        deck,
        discard_pile: discard,
        current_player_index: 0,
        direction: Direction::Clockwise,
        current_color: color,
        action_required: ActionRequired::Play,
        seed: 5,
        rng_stream: 1,
    }
}

/// Moves one copy of `card` from the draw pile to its top.
pub fn put_on_deck_top(state: &mut GameState, card: Card) {
    let pos = state
        .deck
        .iter()
        .position(|d| *d == card)
        .expect("card must be in the deck");
    let c = state.deck.remove(pos);
    state.deck.push(c);
}

/// Moves the whole draw pile under the top discard.
pub fn bury_deck_in_discard(state: &mut GameState) {
    let top = state.discard_pile.pop().expect("discard pile has a top card");
    state.discard_pile.append(&mut state.deck);
    state.discard_pile.push(top);
}

/// Hands the whole draw pile to `seat`.
pub fn give_deck_to(state: &mut GameState, seat: usize) {
    let cards = std::mem::take(&mut state.deck);
    state.players[seat].hand.extend(cards);
}

pub fn red(v: u8) -> Card {
    Card::number(Color::Red, v)
}
