use crate::cards::{Card, CardKind, Color};

/// Whether `card` may be played on `top` while `current_color` is active.
///
/// A card is playable when any of the following holds:
/// - it is a wild (Wild or Wild Draw Four)
/// - its color matches `current_color`, which after a wild is the chosen
///   color rather than the top card's own color
/// - it is an action card of the same kind as `top`
/// - both it and `top` are number cards with the same value
///
/// # Examples
///
/// ```
/// use uno_engine::cards::{Card, Color};
/// use uno_engine::rules::is_playable;
///
/// let top = Card::number(Color::Blue, 7);
/// assert!(is_playable(&Card::number(Color::Red, 7), &top, Color::Blue));
/// assert!(!is_playable(&Card::skip(Color::Red), &top, Color::Blue));
/// assert!(is_playable(&Card::wild(), &top, Color::Blue));
/// ```
pub fn is_playable(card: &Card, top: &Card, current_color: Color) -> bool {
    if card.is_wild() {
        return true;
    }
    if card.color == current_color {
        return true;
    }
    match (card.kind, top.kind) {
        (CardKind::Number(a), CardKind::Number(b)) => a == b,
        (CardKind::Number(_), _) => false,
        (kind, top_kind) => kind == top_kind,
    }
}

/// Playable cards from `hand`, in hand order.
pub fn valid_moves(hand: &[Card], top: &Card, current_color: Color) -> Vec<Card> {
    hand.iter()
        .filter(|c| is_playable(c, top, current_color))
        .copied()
        .collect()
}

/// Hand positions of the playable cards, in hand order.
pub fn playable_indices(hand: &[Card], top: &Card, current_color: Color) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, c)| is_playable(c, top, current_color))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_cards_match_by_kind_across_colors() {
        let top = Card::draw_two(Color::Green);
        assert!(is_playable(&Card::draw_two(Color::Yellow), &top, Color::Green));
        assert!(!is_playable(&Card::skip(Color::Yellow), &top, Color::Green));
    }

    #[test]
    fn chosen_color_overrides_top_card_color() {
        // after a Wild the top card is Wild-colored; only the chosen color counts
        let top = Card::wild();
        assert!(is_playable(&Card::number(Color::Yellow, 2), &top, Color::Yellow));
        assert!(!is_playable(&Card::number(Color::Red, 2), &top, Color::Yellow));
    }

    #[test]
    fn wild_is_playable_on_wild() {
        let top = Card::wild_draw_four();
        assert!(is_playable(&Card::wild(), &top, Color::Red));
    }

    #[test]
    fn indices_line_up_with_moves() {
        let hand = vec![
            Card::number(Color::Red, 1),
            Card::number(Color::Blue, 4),
            Card::wild(),
            Card::skip(Color::Green),
        ];
        let top = Card::number(Color::Red, 4);
        assert_eq!(playable_indices(&hand, &top, Color::Red), vec![0, 1, 2]);
        assert_eq!(
            valid_moves(&hand, &top, Color::Red),
            vec![hand[0], hand[1], hand[2]]
        );
    }
}
