use serde::{Deserialize, Serialize};

use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::scoring::apply_round_scoring;
use crate::domain::state::{next_seat, GameState, Phase, Username};
use crate::domain::{card_beats, hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, MoveKind};

/// Cards played to one trick, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: Username,
    pub lead_suit: Option<Suit>,
    pub plays: Vec<(Username, Card)>,
}

impl Trick {
    pub fn new(leader: Username) -> Self {
        Self {
            leader,
            lead_suit: None,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    pub fn play(&mut self, who: Username, card: Card) {
        if self.plays.is_empty() {
            self.lead_suit = Some(card.suit);
        }
        self.plays.push((who, card));
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    /// Winner of the cards played so far. `None` only for an empty trick.
    pub fn winner(&self, trump: Option<Suit>) -> Option<&Username> {
        let lead = self.lead_suit?;
        let (first, rest) = self.plays.split_first()?;
        let best = rest.iter().fold(first, |best, play| {
            if card_beats(play.1, best.1, lead, trump) {
                play
            } else {
                best
            }
        });
        Some(&best.0)
    }
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Winner of the trick this card completed, if any.
    pub trick_winner: Option<Username>,
    /// Whether this card finished the round and triggered scoring.
    pub round_complete: bool,
}

/// Cards `seat` may legally play, independent of turn enforcement.
pub fn legal_moves(state: &GameState, seat: usize) -> Vec<Card> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    let Some(player) = state.players.get(seat) else {
        return Vec::new();
    };
    let mut hand = player.hand.clone();
    hand.sort();

    let lead = state.current_trick.as_ref().and_then(|t| t.lead_suit);
    let (Some(lead), true) = (lead, state.rules.follow_suit) else {
        return hand;
    };

    if hand_has_suit(&hand, lead) {
        return hand.into_iter().filter(|c| c.suit == lead).collect();
    }
    if let Some(trump) = state.contract.and_then(|c| c.trump_suit()) {
        if hand_has_suit(&hand, trump) {
            return hand.into_iter().filter(|c| c.suit == trump).collect();
        }
    }
    hand
}

/// Play a card into the current trick, enforcing phase, turn, ownership and
/// suit-following. Completes the trick on the third card and scores the
/// round after the tenth trick.
pub fn play_card(
    state: &mut GameState,
    username: &Username,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    state.require_phase(Phase::Playing, "play_card")?;
    let seat = state.require_seat(username)?;
    state.require_turn(seat)?;

    let Some(pos) = state.players[seat].hand.iter().position(|&c| c == card) else {
        return Err(DomainError::illegal_move(
            MoveKind::CardNotInHand,
            format!("{card} is not in {username}'s hand"),
        ));
    };

    if !legal_moves(state, seat).contains(&card) {
        return Err(DomainError::illegal_move(
            MoveKind::MustFollowSuit,
            format!("{card} does not follow suit"),
        ));
    }

    let trump = state.contract.and_then(|c| c.trump_suit());
    let removed = state.players[seat].hand.remove(pos);
    let trick = state
        .current_trick
        .get_or_insert_with(|| Trick::new(username.clone()));
    trick.play(username.clone(), removed);

    if !trick.is_complete() {
        state.current = next_seat(seat);
        return Ok(PlayCardResult {
            trick_winner: None,
            round_complete: false,
        });
    }

    let winner = trick
        .winner(trump)
        .cloned()
        .ok_or_else(|| DomainError::illegal_state("Completed trick has no winner"))?;
    let winner_seat = state.require_seat(&winner)?;
    *state.tricks_won.entry(winner.clone()).or_insert(0) += 1;
    if let Some(done) = state.current_trick.take() {
        state.completed_tricks.push(done);
    }

    let round_complete = state.completed_tricks.len() == TRICKS_PER_ROUND as usize;
    if round_complete {
        let result = apply_round_scoring(state)?;
        state.last_round = Some(result);
        state.phase = Phase::RoundComplete;
    } else {
        state.current_trick = Some(Trick::new(winner.clone()));
        state.current = winner_seat;
    }

    Ok(PlayCardResult {
        trick_winner: Some(winner),
        round_complete,
    })
}
