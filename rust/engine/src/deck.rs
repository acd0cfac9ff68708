//! Deck construction, shuffling, dealing and drawing.
//!
//! Decks and discard piles are plain `Vec<Card>` values whose last element is
//! the top. Every function here consumes its input piles and hands back new
//! ones, so nothing is shared between calls.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, warn};

use crate::cards::{full_deck, Card};

/// Cards dealt to each player at the start of a game.
pub const HAND_SIZE: usize = 7;

/// Result of [`deal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub remaining: Vec<Card>,
    /// How many cards could not be dealt because the deck ran dry.
    pub shortfall: usize,
}

/// Result of [`draw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub drawn: Vec<Card>,
    pub deck: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub reshuffled: bool,
}

/// Unshuffled 108-card deck.
pub fn build_deck() -> Vec<Card> {
    full_deck()
}

/// Seeded generator used for the opening shuffle.
pub fn rng_from_seed(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Seeded generator on a numbered stream; reshuffles during play draw from
/// stream N so they stay reproducible without carrying RNG state around.
pub fn rng_for_stream(seed: u64, stream: u64) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Fisher-Yates shuffle: walk from the last index down, swapping each slot
/// with a uniformly chosen slot at or below it.
pub fn shuffle<R: Rng + ?Sized>(mut cards: Vec<Card>, rng: &mut R) -> Vec<Card> {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
    cards
}

/// Deals `hand_size` rounds of one card per player from the top of `deck`.
pub fn deal(mut deck: Vec<Card>, num_players: usize, hand_size: usize) -> Deal {
    let mut hands: Vec<Vec<Card>> = (0..num_players)
        .map(|_| Vec::with_capacity(hand_size))
        .collect();
    let needed = num_players * hand_size;
    let mut dealt = 0usize;

    'rounds: for _ in 0..hand_size {
        for hand in hands.iter_mut() {
            match deck.pop() {
                Some(c) => {
                    hand.push(c);
                    dealt += 1;
                }
                None => break 'rounds,
            }
        }
    }

    let shortfall = needed - dealt;
    if shortfall > 0 {
        warn!(needed, dealt, "deck ran out of cards during initial deal");
    }
    Deal {
        hands,
        remaining: deck,
        shortfall,
    }
}

/// Draws up to `n` cards. An empty deck is refilled from the discard pile
/// (all but its top card, shuffled). Returns fewer than `n` cards only when
/// both piles are exhausted.
pub fn draw<R: Rng + ?Sized>(
    mut deck: Vec<Card>,
    mut discard_pile: Vec<Card>,
    n: usize,
    rng: &mut R,
) -> Draw {
    let mut drawn = Vec::with_capacity(n);
    let mut reshuffled = false;

    for _ in 0..n {
        if deck.is_empty() {
            if discard_pile.len() <= 1 {
                warn!(
                    requested = n,
                    drawn = drawn.len(),
                    "cannot draw card: deck and discard pile are empty"
                );
                break;
            }
            let top = discard_pile.pop();
            deck = shuffle(std::mem::take(&mut discard_pile), rng);
            discard_pile.extend(top);
            reshuffled = true;
            debug!(deck = deck.len(), "reshuffled discard pile into deck");
        }
        match deck.pop() {
            Some(c) => drawn.push(c),
            None => break,
        }
    }

    Draw {
        drawn,
        deck,
        discard_pile,
        reshuffled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn deal_round_robin_takes_from_top() {
        let deck: Vec<Card> = (0..6).map(|v| Card::number(Color::Red, v)).collect();
        let d = deal(deck, 2, 2);
        // top is the end of the vector: 5 to p0, 4 to p1, 3 to p0, 2 to p1
        assert_eq!(
            d.hands[0],
            vec![Card::number(Color::Red, 5), Card::number(Color::Red, 3)]
        );
        assert_eq!(
            d.hands[1],
            vec![Card::number(Color::Red, 4), Card::number(Color::Red, 2)]
        );
        assert_eq!(d.remaining.len(), 2);
        assert_eq!(d.shortfall, 0);
    }

    #[test]
    fn deal_reports_shortfall() {
        let deck = vec![Card::wild(); 5];
        let d = deal(deck, 3, 2);
        assert_eq!(d.shortfall, 1);
        assert!(d.remaining.is_empty());
        assert_eq!(d.hands.iter().map(Vec::len).sum::<usize>(), 5);
    }

    #[test]
    fn draw_reshuffles_everything_but_top_discard() {
        let mut rng = rng_from_seed(3);
        let discard = vec![
            Card::number(Color::Blue, 1),
            Card::number(Color::Blue, 2),
            Card::number(Color::Blue, 3),
        ];
        let d = draw(Vec::new(), discard, 2, &mut rng);
        assert!(d.reshuffled);
        assert_eq!(d.drawn.len(), 2);
        assert_eq!(d.discard_pile, vec![Card::number(Color::Blue, 3)]);
        assert!(d.deck.is_empty());
        assert!(!d.drawn.contains(&Card::number(Color::Blue, 3)));
    }

    #[test]
    fn draw_stops_short_when_both_piles_are_empty() {
        let mut rng = rng_from_seed(9);
        let d = draw(
            vec![Card::skip(Color::Green)],
            vec![Card::wild()],
            3,
            &mut rng,
        );
        assert_eq!(d.drawn, vec![Card::skip(Color::Green)]);
        assert_eq!(d.discard_pile, vec![Card::wild()]);
        assert!(!d.reshuffled);
    }

    #[test]
    fn stream_rngs_are_reproducible_and_distinct() {
        let a = shuffle(build_deck(), &mut rng_for_stream(11, 1));
        let b = shuffle(build_deck(), &mut rng_for_stream(11, 1));
        let c = shuffle(build_deck(), &mut rng_for_stream(11, 2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
