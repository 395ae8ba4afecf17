//! Deal lifecycle: first deal, all-pass redeals and new rounds.

use tracing::debug;

use crate::domain::dealing::{deal_round, derive_dealing_seed};
use crate::domain::state::{next_seat, GameState, Phase};
use crate::errors::domain::DomainError;

/// Deal fresh hands for the current dealer and open the auction.
pub fn deal_hands(state: &mut GameState) -> Result<(), DomainError> {
    let seed = derive_dealing_seed(state.rng_seed, state.deal_no);
    let deal = deal_round(seed)?;
    for (player, hand) in state.players.iter_mut().zip(deal.hands) {
        player.hand = hand;
    }
    state.widow = deal.widow;
    state.deal_no += 1;
    state.phase = Phase::Bidding;
    state.current = next_seat(state.dealer);
    debug!(
        game_id = %state.game_id,
        round_no = state.round_no,
        deal_no = state.deal_no,
        "Dealt hands"
    );
    Ok(())
}

/// First deal once the table is full. Seat 0 deals.
pub fn start_game(state: &mut GameState) -> Result<(), DomainError> {
    state.require_phase(Phase::WaitingForPlayers, "start_game")?;
    if !state.is_full() {
        return Err(DomainError::illegal_state("Need three players to start"));
    }
    state.dealer = 0;
    deal_hands(state)
}

/// Everyone passed: same dealer, same round number, new cards.
pub fn redeal_after_all_pass(state: &mut GameState) -> Result<(), DomainError> {
    state.all_pass_streak += 1;
    state.clear_deal();
    deal_hands(state)
}

pub fn start_next_round(state: &mut GameState) -> Result<(), DomainError> {
    state.require_phase(Phase::RoundComplete, "start_next_round")?;
    state.next_round();
    deal_hands(state)
}
