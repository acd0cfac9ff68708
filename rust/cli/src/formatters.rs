//! Card, hand, and action formatters for terminal display.
//!
//! Pure functions; nothing here writes to a stream. Action symbols use
//! Unicode where the terminal is likely to render it and fall back to ASCII
//! otherwise (see [`supports_unicode`]).
//!
//! ```rust
//! use uno_engine::cards::{Card, Color};
//! use uno_cli::formatters::{format_card, format_hand};
//!
//! assert_eq!(format_card(&Card::number(Color::Red, 7)), "R7");
//! assert_eq!(format_hand(&[Card::wild()]), "[0] W");
//! ```

use uno_engine::cards::{Card, CardKind, Color};
use uno_engine::game::GameState;
use uno_engine::player::PlayerAction;
use uno_engine::turn::Direction;

/// Check if the terminal supports Unicode symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// One-letter color tag: R, G, B, Y, or W for wild.
pub fn format_color(color: Color) -> &'static str {
    match color {
        Color::Red => "R",
        Color::Green => "G",
        Color::Blue => "B",
        Color::Yellow => "Y",
        Color::Wild => "W",
    }
}

fn format_kind(kind: CardKind) -> String {
    let unicode = supports_unicode();
    match kind {
        CardKind::Number(v) => v.to_string(),
        CardKind::Skip => (if unicode { "⊘" } else { "S" }).to_string(),
        CardKind::Reverse => (if unicode { "⇄" } else { "R" }).to_string(),
        CardKind::DrawTwo => "+2".to_string(),
        CardKind::Wild => String::new(),
        CardKind::WildDrawFour => "+4".to_string(),
    }
}

/// Short label for a card: `R7`, `B+2`, `W`, `W+4`, `G⊘` (or `GS` in ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_color(card.color), format_kind(card.kind))
}

/// Hand with the indices a player types to play a card: `[0] R7 [1] W`.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i, format_card(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Play { hand_index } => format!("play {}", hand_index),
        PlayerAction::ChooseColor(color) => format!("color {}", color.to_string().to_lowercase()),
        PlayerAction::Draw => "draw".to_string(),
    }
}

/// Table summary from one seat's point of view: top card, active color,
/// direction, and every opponent's card count.
pub fn format_table(state: &GameState, viewer: usize) -> String {
    let top = state
        .top_card()
        .map(format_card)
        .unwrap_or_else(|| "-".to_string());
    let direction = match state.direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    };
    let others: Vec<String> = state
        .players
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != viewer)
        .map(|(_, p)| format!("{}: {}", p.name, p.hand_size()))
        .collect();
    format!(
        "Top: {} | Color: {} | Direction: {} | Deck: {} | {}",
        top,
        state.current_color,
        direction,
        state.deck.len(),
        others.join(", ")
    )
}
