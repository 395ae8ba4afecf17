use std::collections::HashSet;

use crate::domain::dealing::WIDOW_SIZE;
use crate::domain::state::{GameState, Phase, Username};
use crate::domain::tricks::Trick;
use crate::domain::Card;
use crate::errors::domain::{DomainError, MoveKind};

/// Declarer takes the widow and puts aside exactly two cards, then leads
/// the first trick.
pub fn exchange_widow(
    state: &mut GameState,
    username: &Username,
    discarded: &[Card],
) -> Result<(), DomainError> {
    state.require_phase(Phase::WidowExchange, "exchange_widow")?;
    let seat = state.require_seat(username)?;
    if !state.is_declarer(username) {
        return Err(DomainError::illegal_turn(
            "Only the declarer exchanges the widow",
        ));
    }

    if discarded.len() != WIDOW_SIZE {
        return Err(DomainError::illegal_move(
            MoveKind::DiscardCount,
            format!(
                "Must discard exactly {WIDOW_SIZE} cards, got {}",
                discarded.len()
            ),
        ));
    }
    let unique: HashSet<&Card> = discarded.iter().collect();
    if unique.len() != discarded.len() {
        return Err(DomainError::illegal_move(
            MoveKind::DuplicateDiscard,
            "The same card was discarded twice",
        ));
    }

    let mut hand = state.players[seat].hand.clone();
    hand.extend(state.widow.iter().copied());
    for card in discarded {
        let Some(pos) = hand.iter().position(|c| c == card) else {
            return Err(DomainError::illegal_move(
                MoveKind::CardNotInHand,
                format!("{card} is neither in hand nor in the widow"),
            ));
        };
        hand.remove(pos);
    }
    hand.sort();

    state.players[seat].hand = hand;
    state.widow.clear();
    state.discards = discarded.to_vec();
    state.phase = Phase::Playing;
    state.current = seat;
    state.current_trick = Some(Trick::new(username.clone()));
    Ok(())
}
