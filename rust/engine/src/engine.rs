use tracing::{debug, info, warn};

use crate::cards::{CardKind, Color};
use crate::deck::{build_deck, deal, draw, rng_from_seed, shuffle, HAND_SIZE};
use crate::errors::GameError;
use crate::game::{ActionRequired, GameState};
use crate::player::{Player, PlayerAction};
use crate::rules::is_playable;
use crate::turn::{apply_effect, next_index, Direction};

/// Starts a game with a random seed. See [`initialize_game_with_seed`].
pub fn initialize_game<S: AsRef<str>>(player_names: &[S]) -> Result<GameState, GameError> {
    initialize_game_with_seed(player_names, rand::random())
}

/// Starts a game: shuffles a fresh deck with `seed`, deals seven cards to
/// each player and turns up a starting card.
///
/// A Wild Draw Four can never start the game; it stays in the discard pile
/// and the next card is turned up. A plain Wild starting card leaves player 0
/// to choose the color (Red until then). Any other starting card takes
/// effect as if player 0 had played it.
///
/// # Errors
///
/// - [`GameError::NotEnoughPlayers`] for fewer than two names
/// - [`GameError::DeckShortOnDeal`] when the deck cannot cover every hand
/// - [`GameError::NoStartingCard`] when the deck runs out while looking for a
///   starting card
///
/// # Examples
///
/// ```
/// use uno_engine::engine::initialize_game_with_seed;
/// use uno_engine::game::ActionRequired;
///
/// let state = initialize_game_with_seed(&["Ann", "Bo", "Cy"], 42).unwrap();
/// assert_eq!(state.players.len(), 3);
/// assert_eq!(state.total_cards(), 108);
/// assert_ne!(state.action_required, ActionRequired::GameOver);
/// ```
pub fn initialize_game_with_seed<S: AsRef<str>>(
    player_names: &[S],
    seed: u64,
) -> Result<GameState, GameError> {
    if player_names.len() < 2 {
        return Err(GameError::NotEnoughPlayers {
            count: player_names.len(),
        });
    }

    let mut rng = rng_from_seed(seed);
    let deck = shuffle(build_deck(), &mut rng);
    let dealt = deal(deck, player_names.len(), HAND_SIZE);
    if dealt.shortfall > 0 {
        return Err(GameError::DeckShortOnDeal {
            missing: dealt.shortfall,
        });
    }

    let players: Vec<Player> = player_names
        .iter()
        .zip(dealt.hands)
        .enumerate()
        .map(|(seat, (name, hand))| Player::new(seat, name.as_ref(), hand))
        .collect();

    let mut deck = dealt.remaining;
    let mut discard_pile = Vec::new();
    let first = loop {
        let card = deck.pop().ok_or(GameError::NoStartingCard)?;
        discard_pile.push(card);
        if card.kind != CardKind::WildDrawFour {
            break card;
        }
        debug!("Wild Draw Four cannot start the game, turning up another card");
    };

    let state = GameState {
        players,
        deck,
        discard_pile,
        current_player_index: 0,
        direction: Direction::Clockwise,
        current_color: if first.is_wild() {
            Color::Red
        } else {
            first.color
        },
        action_required: ActionRequired::Play,
        seed,
        rng_stream: 1,
    };
    info!(seed, players = state.num_players(), start = %first, "game initialized");

    if first.kind == CardKind::Wild {
        return Ok(GameState {
            action_required: ActionRequired::ChooseColor,
            ..state
        });
    }
    Ok(apply_effect(first, state, 0))
}

/// Plays the card at `hand_index` from `player_index`'s hand.
///
/// Emptying the hand ends the game immediately; the winning card's effect
/// is not resolved.
///
/// # Errors
///
/// [`GameError::NotPlayersTurn`], [`GameError::ActionMismatch`] outside the
/// play phase, [`GameError::InvalidCardIndex`] and
/// [`GameError::CardNotPlayable`].
pub fn play_card(
    state: &GameState,
    player_index: usize,
    hand_index: usize,
) -> Result<GameState, GameError> {
    ensure_turn(state, player_index)?;
    ensure_action(state, ActionRequired::Play, "play a card")?;

    let hand = &state.players[player_index].hand;
    let card = *hand.get(hand_index).ok_or(GameError::InvalidCardIndex {
        index: hand_index,
        hand_size: hand.len(),
    })?;
    // the discard pile is never empty once a game has started
    let top = *state.top_card().ok_or(GameError::NoStartingCard)?;
    if !is_playable(&card, &top, state.current_color) {
        return Err(GameError::CardNotPlayable {
            card,
            top,
            color: state.current_color,
        });
    }

    let mut next = state.clone();
    next.players[player_index].hand.remove(hand_index);
    next.discard_pile.push(card);

    let player = &next.players[player_index];
    match player.hand_size() {
        0 => {
            info!(player = %player.name, "wins");
            next.action_required = ActionRequired::GameOver;
            next.current_player_index = player_index;
            return Ok(next);
        }
        1 => info!(player = %player.name, "says UNO"),
        _ => {}
    }
    debug!(player = %player.name, card = %card, "played");

    Ok(apply_effect(card, next, player_index))
}

/// Names the active color after `player_index` played a wild.
///
/// After a plain Wild the next seat plays; after a Wild Draw Four the next
/// seat has already drawn and is skipped.
///
/// # Errors
///
/// [`GameError::NotPlayersTurn`], [`GameError::ActionMismatch`] unless a
/// color choice is pending, [`GameError::WildColorChoice`].
pub fn choose_color(
    state: &GameState,
    player_index: usize,
    color: Color,
) -> Result<GameState, GameError> {
    ensure_turn(state, player_index)?;
    ensure_action(state, ActionRequired::ChooseColor, "choose a color")?;
    if color.is_wild() {
        return Err(GameError::WildColorChoice);
    }

    let n = state.num_players();
    let next_player = match state.top_card().map(|c| c.kind) {
        Some(CardKind::Wild) => next_index(player_index, n, state.direction),
        Some(CardKind::WildDrawFour) => {
            let target = next_index(player_index, n, state.direction);
            next_index(target, n, state.direction)
        }
        _ => player_index,
    };
    info!(player = %state.players[player_index].name, color = %color, "chose color");

    let mut next = state.clone();
    next.current_color = color;
    next.current_player_index = next_player;
    next.action_required = ActionRequired::Play;
    Ok(next)
}

/// `player_index` draws one card.
///
/// A playable drawn card keeps the turn with the same player, who may play
/// it or draw again. Otherwise, or when nothing could be drawn, the turn
/// passes. Drawing is allowed even with playable cards in hand.
///
/// # Errors
///
/// [`GameError::NotPlayersTurn`], [`GameError::ActionMismatch`] outside the
/// play phase.
pub fn handle_draw(state: &GameState, player_index: usize) -> Result<GameState, GameError> {
    ensure_turn(state, player_index)?;
    ensure_action(state, ActionRequired::Play, "draw")?;

    let mut next = state.clone();
    let mut rng = next.next_rng();
    let result = draw(
        std::mem::take(&mut next.deck),
        std::mem::take(&mut next.discard_pile),
        1,
        &mut rng,
    );
    next.deck = result.deck;
    next.discard_pile = result.discard_pile;
    let pass_to = next_index(player_index, next.num_players(), next.direction);
    next.action_required = ActionRequired::Play;

    let Some(&card) = result.drawn.first() else {
        warn!(player = %next.players[player_index].name, "nothing to draw, turn passes");
        next.current_player_index = pass_to;
        return Ok(next);
    };

    next.players[player_index].hand.push(card);
    let playable = next
        .top_card()
        .is_some_and(|top| is_playable(&card, top, next.current_color));
    if playable {
        debug!(player = %next.players[player_index].name, card = %card, "drew a playable card");
    } else {
        debug!(player = %next.players[player_index].name, card = %card, "drew, turn passes");
        next.current_player_index = pass_to;
    }
    Ok(next)
}

/// Dispatches a [`PlayerAction`] to the matching operation.
pub fn apply_action(
    state: &GameState,
    player_index: usize,
    action: PlayerAction,
) -> Result<GameState, GameError> {
    match action {
        PlayerAction::Play { hand_index } => play_card(state, player_index, hand_index),
        PlayerAction::ChooseColor(color) => choose_color(state, player_index, color),
        PlayerAction::Draw => handle_draw(state, player_index),
    }
}

fn ensure_turn(state: &GameState, player_index: usize) -> Result<(), GameError> {
    if player_index != state.current_player_index {
        return Err(GameError::NotPlayersTurn {
            expected: state.current_player_index,
            actual: player_index,
        });
    }
    Ok(())
}

fn ensure_action(
    state: &GameState,
    required: ActionRequired,
    attempted: &'static str,
) -> Result<(), GameError> {
    if state.action_required != required {
        return Err(GameError::ActionMismatch {
            required: state.action_required,
            attempted,
        });
    }
    Ok(())
}
