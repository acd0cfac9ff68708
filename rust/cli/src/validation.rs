//! Input parsing for the interactive `play` command.

use uno_engine::cards::Color;
use uno_engine::player::PlayerAction;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// Ask the advisor for a suggestion
    Hint,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a PlayerAction or a special command.
///
/// Accepted (case-insensitive):
/// - `play N` / `p N` → play the card at hand position N
/// - `draw` / `d` → draw a card
/// - `color C` / `c C` → name a color after a wild (red, green, blue, yellow or r/g/b/y)
/// - `hint` / `h` → advisor suggestion
/// - `q` / `quit` → quit
///
/// ```rust
/// # use uno_cli::validation::{parse_player_action, ParseResult};
/// use uno_engine::cards::Color;
/// use uno_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("play 2"),
///     ParseResult::Action(PlayerAction::Play { hand_index: 2 })
/// );
/// assert_eq!(
///     parse_player_action("color b"),
///     ParseResult::Action(PlayerAction::ChooseColor(Color::Blue))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("fold") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "h" | "hint" => ParseResult::Hint,
        "d" | "draw" => ParseResult::Action(PlayerAction::Draw),
        "p" | "play" => {
            let Some(arg) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Play requires a card position (e.g., 'play 0')".to_string(),
                );
            };
            match arg.parse::<usize>() {
                Ok(hand_index) => ParseResult::Action(PlayerAction::Play { hand_index }),
                Err(_) => ParseResult::Invalid(format!("Invalid card position '{}'", arg)),
            }
        }
        "c" | "color" => {
            let Some(arg) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Color requires a color (e.g., 'color red')".to_string(),
                );
            };
            match arg.parse::<Color>() {
                Ok(Color::Wild) => ParseResult::Invalid(
                    "Choose red, green, blue or yellow".to_string(),
                ),
                Ok(color) => ParseResult::Action(PlayerAction::ChooseColor(color)),
                Err(e) => ParseResult::Invalid(e),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: play <n>, draw, color <c>, hint, q",
            parts[0]
        )),
    }
}
