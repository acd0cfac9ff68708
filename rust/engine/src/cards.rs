use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of cards in a complete Uno deck.
pub const DECK_SIZE: usize = 108;

/// Highest face value on a number card.
pub const MAX_NUMBER: u8 = 9;

/// Card color. `Wild` only appears on wild-kind cards and is never a valid
/// "current color" of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Color {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Yellow
    Yellow,
    /// Color carried by Wild and Wild Draw Four cards
    Wild,
}

impl Color {
    pub fn is_wild(self) -> bool {
        matches!(self, Color::Wild)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Wild => "Wild",
        };
        f.write_str(s)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Color::Red),
            "g" | "green" => Ok(Color::Green),
            "b" | "blue" => Ok(Color::Blue),
            "y" | "yellow" => Ok(Color::Yellow),
            "w" | "wild" => Ok(Color::Wild),
            other => Err(format!("Unknown color: {}", other)),
        }
    }
}

/// What a card does when played. Number cards carry their face value (0-9).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "KindRepr")]
pub enum CardKind {
    /// Plain number card
    Number(u8),
    /// Next player loses their turn
    Skip,
    /// Play direction flips
    Reverse,
    /// Next player draws two and loses their turn
    DrawTwo,
    /// Player picks the new color
    Wild,
    /// Next player draws four and loses their turn; player picks the new color
    WildDrawFour,
}

impl CardKind {
    pub fn is_number(self) -> bool {
        matches!(self, CardKind::Number(_))
    }
}

// Wire shape of `CardKind`; decoding goes through the range check below.
#[derive(Deserialize)]
enum KindRepr {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl TryFrom<KindRepr> for CardKind {
    type Error = String;

    fn try_from(repr: KindRepr) -> Result<Self, Self::Error> {
        Ok(match repr {
            KindRepr::Number(v) if v > MAX_NUMBER => {
                return Err(format!("number card value {} is out of range 0-9", v));
            }
            KindRepr::Number(v) => CardKind::Number(v),
            KindRepr::Skip => CardKind::Skip,
            KindRepr::Reverse => CardKind::Reverse,
            KindRepr::DrawTwo => CardKind::DrawTwo,
            KindRepr::Wild => CardKind::Wild,
            KindRepr::WildDrawFour => CardKind::WildDrawFour,
        })
    }
}

/// A single Uno card. Cards have no identity beyond their value, so two
/// equal cards are interchangeable.
///
/// Decoding rejects number values above 9 and cards whose color does not
/// match their kind (wild kinds carry `Color::Wild`, nothing else does).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "CardRepr")]
pub struct Card {
    pub color: Color,
    pub kind: CardKind,
}

#[derive(Deserialize)]
struct CardRepr {
    color: Color,
    kind: CardKind,
}

impl TryFrom<CardRepr> for Card {
    type Error = String;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        let wild_kind = matches!(repr.kind, CardKind::Wild | CardKind::WildDrawFour);
        if wild_kind != repr.color.is_wild() {
            return Err(format!("{:?} card cannot be {}", repr.kind, repr.color));
        }
        Ok(Card {
            color: repr.color,
            kind: repr.kind,
        })
    }
}

impl Card {
    /// # Panics
    ///
    /// If `value` is above 9. Use [`Card::try_number`] for unchecked input.
    pub fn number(color: Color, value: u8) -> Self {
        match Self::try_number(color, value) {
            Some(card) => card,
            None => panic!("number cards run 0-9, got {}", value),
        }
    }

    /// A number card, or `None` when `value` is above 9 or `color` is wild.
    pub fn try_number(color: Color, value: u8) -> Option<Self> {
        if value > MAX_NUMBER || color.is_wild() {
            return None;
        }
        Some(Self {
            color,
            kind: CardKind::Number(value),
        })
    }

    pub fn skip(color: Color) -> Self {
        Self {
            color,
            kind: CardKind::Skip,
        }
    }

    pub fn reverse(color: Color) -> Self {
        Self {
            color,
            kind: CardKind::Reverse,
        }
    }

    pub fn draw_two(color: Color) -> Self {
        Self {
            color,
            kind: CardKind::DrawTwo,
        }
    }

    pub fn wild() -> Self {
        Self {
            color: Color::Wild,
            kind: CardKind::Wild,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            color: Color::Wild,
            kind: CardKind::WildDrawFour,
        }
    }

    /// Face value for number cards, `None` for everything else.
    pub fn value(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.color.is_wild()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Number(v) => write!(f, "{} {}", self.color, v),
            CardKind::Skip => write!(f, "{} Skip", self.color),
            CardKind::Reverse => write!(f, "{} Reverse", self.color),
            CardKind::DrawTwo => write!(f, "{} Draw Two", self.color),
            CardKind::Wild => f.write_str("Wild"),
            CardKind::WildDrawFour => f.write_str("Wild Draw Four"),
        }
    }
}

/// The four colors a non-wild card can have, in deck construction order.
pub fn all_colors() -> [Color; 4] {
    [Color::Red, Color::Green, Color::Blue, Color::Yellow]
}

/// Builds the full 108-card deck in a fixed order: numbers per color, then
/// Skip/Reverse/DrawTwo pairs per color, then four Wild and four Wild Draw Four.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &c in &all_colors() {
        v.push(Card::number(c, 0));
        for n in 1..=9 {
            v.push(Card::number(c, n));
            v.push(Card::number(c, n));
        }
    }
    for &c in &all_colors() {
        for make in [Card::skip, Card::reverse, Card::draw_two] {
            v.push(make(c));
            v.push(make(c));
        }
    }
    for make in [Card::wild, Card::wild_draw_four] {
        for _ in 0..4 {
            v.push(make());
        }
    }
    v
}
