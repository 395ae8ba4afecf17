//! Single-deal auction.
//!
//! Each player bids in turn. A pass is final: passed players are skipped.
//! The auction closes when all three have spoken and either everyone passed
//! or exactly one non-pass bid is left.

use std::collections::BTreeMap;

use crate::domain::contract::Contract;
use crate::domain::round::redeal_after_all_pass;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{next_seat, GameState, Phase, Username};
use crate::domain::validation::validate_bid;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BidOutcome {
    /// Auction still open; the turn moved on.
    Continue,
    /// Everybody passed and the cards were redealt.
    AllPass,
    /// Auction closed with a declarer.
    Won {
        declarer: Username,
        contract: Contract,
    },
}

pub fn is_bidding_complete(bids: &BTreeMap<Username, Contract>) -> bool {
    if bids.len() < PLAYERS {
        return false;
    }
    let game_bids = bids.values().filter(|c| !c.is_pass()).count();
    game_bids <= 1
}

/// Holder of the highest non-pass bid.
pub fn auction_winner(bids: &BTreeMap<Username, Contract>) -> Option<(Username, Contract)> {
    let mut best: Option<(&Username, Contract)> = None;
    for (who, &bid) in bids {
        if bid.is_pass() {
            continue;
        }
        match best {
            Some((_, current)) if !bid.is_higher_than(current) => {}
            _ => best = Some((who, bid)),
        }
    }
    best.map(|(who, c)| (who.clone(), c))
}

fn next_bidder(state: &GameState, from: usize) -> usize {
    let mut seat = next_seat(from);
    for _ in 0..PLAYERS {
        let passed = state
            .players
            .get(seat)
            .and_then(|p| state.bids.get(&p.username))
            .is_some_and(|c| c.is_pass());
        if !passed {
            return seat;
        }
        seat = next_seat(seat);
    }
    seat
}

pub fn place_bid(
    state: &mut GameState,
    username: &Username,
    bid: Contract,
) -> Result<BidOutcome, DomainError> {
    state.require_phase(Phase::Bidding, "place_bid")?;
    let seat = state.require_seat(username)?;
    state.require_turn(seat)?;
    validate_bid(state, bid)?;

    state.bids.insert(username.clone(), bid);

    if !is_bidding_complete(&state.bids) {
        state.current = next_bidder(state, seat);
        return Ok(BidOutcome::Continue);
    }

    match auction_winner(&state.bids) {
        None => {
            redeal_after_all_pass(state)?;
            Ok(BidOutcome::AllPass)
        }
        Some((declarer, contract)) => {
            let declarer_seat = state.require_seat(&declarer)?;
            state.declarer = Some(declarer.clone());
            state.contract = Some(contract);
            state.phase = Phase::WidowExchange;
            state.current = declarer_seat;
            Ok(BidOutcome::Won { declarer, contract })
        }
    }
}
