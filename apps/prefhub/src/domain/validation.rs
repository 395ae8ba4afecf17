//! Bid and whist legality checks against the active `GameRules`.
//!
//! Pure predicates: nothing here mutates state. The engine consults these
//! before committing an action, so a rejected bid is never clamped or
//! partially applied.

use crate::domain::contract::{Contract, Level};
use crate::domain::rules::{MizerExitType, TenGameMode};
use crate::domain::state::{GameState, Phase, Username, WhistDecision};
use crate::domain::Trump;
use crate::errors::domain::{ConflictKind, DomainError, MoveKind};

/// Minimum game level after `streak` consecutive all-pass deals.
pub fn required_exit_tricks(policy: MizerExitType, streak: u32) -> u8 {
    match policy {
        MizerExitType::Flat6 => 6,
        MizerExitType::Escalating678 => match streak {
            0 | 1 => 6,
            2 => 7,
            _ => 8,
        },
        MizerExitType::Escalating677 => match streak {
            0 | 1 => 6,
            _ => 7,
        },
    }
}

/// Whether `bid` is strong enough to end the current all-pass streak.
/// Always true when no streak is running.
pub fn can_exit_mizer(state: &GameState, bid: Contract) -> bool {
    if state.all_pass_streak == 0 {
        return true;
    }
    match bid {
        Contract::Pass => true,
        Contract::Miser => state.rules.allow_miser_exit,
        Contract::Game { level, .. } => {
            level.tricks() >= required_exit_tricks(state.rules.mizer_exit, state.all_pass_streak)
        }
    }
}

pub fn validate_bid(state: &GameState, bid: Contract) -> Result<(), DomainError> {
    if bid.is_pass() {
        return Ok(());
    }

    if let Contract::Game { level, .. } = bid {
        if level.tricks() < state.rules.minimum_opening_bid {
            return Err(DomainError::illegal_move(
                MoveKind::BidBelowMinimum,
                format!(
                    "{bid} is below the minimum opening level {}",
                    state.rules.minimum_opening_bid
                ),
            ));
        }
    }

    if !can_exit_mizer(state, bid) {
        let detail = if bid.is_miser() {
            "Miser cannot end an all-pass streak under these rules".to_string()
        } else {
            format!(
                "{bid} is below the all-pass exit level {}",
                required_exit_tricks(state.rules.mizer_exit, state.all_pass_streak)
            )
        };
        return Err(DomainError::illegal_move(MoveKind::BidBelowExitLevel, detail));
    }

    if let Some(highest) = state.highest_bid() {
        if !bid.is_higher_than(highest) {
            return Err(DomainError::illegal_move(
                MoveKind::BidNotHigher,
                format!("{bid} is not higher than {highest}"),
            ));
        }
    }
    Ok(())
}

/// PASS plus every contract `validate_bid` accepts, weakest first.
pub fn available_bids(state: &GameState) -> Vec<Contract> {
    std::iter::once(Contract::Pass)
        .chain(
            Contract::all()
                .into_iter()
                .filter(|c| validate_bid(state, *c).is_ok()),
        )
        .collect()
}

fn whist_window_open(state: &GameState) -> bool {
    match state.phase {
        Phase::WidowExchange => true,
        Phase::Playing => state.completed_tricks.is_empty(),
        _ => false,
    }
}

pub fn validate_whist(
    state: &GameState,
    defender: &Username,
    decision: WhistDecision,
) -> Result<(), DomainError> {
    if !whist_window_open(state) {
        return Err(DomainError::illegal_state(
            "Whist can only be declared before the first trick completes",
        ));
    }
    state.require_seat(defender)?;
    if state.is_declarer(defender) {
        return Err(DomainError::illegal_move(
            MoveKind::WhistNotAllowed,
            "The declarer does not whist",
        ));
    }
    if state.whists.contains_key(defender) {
        return Err(DomainError::conflict(
            ConflictKind::WhistAlreadyDeclared,
            format!("{defender} already declared"),
        ));
    }

    let Some(contract) = state.contract else {
        return Err(DomainError::illegal_state("No contract to whist against"));
    };
    if contract.is_miser() {
        return Err(DomainError::illegal_move(
            MoveKind::WhistNotAllowed,
            "Miser is played without whist",
        ));
    }

    let rules = &state.rules;
    match decision {
        WhistDecision::Whist => Ok(()),
        WhistDecision::Pass => {
            if rules.mandatory_six_spades_whist
                && contract == Contract::game(Level::Six, Trump::Spades)
            {
                return Err(DomainError::illegal_move(
                    MoveKind::WhistNotAllowed,
                    "Six spades must be whisted",
                ));
            }
            if rules.ten_game_mode == TenGameMode::Checked && contract.level() == Some(Level::Ten)
            {
                return Err(DomainError::illegal_move(
                    MoveKind::WhistNotAllowed,
                    "Ten-trick games are checked and must be whisted",
                ));
            }
            Ok(())
        }
        WhistDecision::HalfWhist => {
            if !rules.allow_half_whist {
                return Err(DomainError::illegal_move(
                    MoveKind::WhistNotAllowed,
                    "Half whist is disabled",
                ));
            }
            let partner_passed = state
                .whists
                .iter()
                .any(|(who, d)| who != defender && *d == WhistDecision::Pass);
            if partner_passed && !rules.allow_half_whist_after_pass {
                return Err(DomainError::illegal_move(
                    MoveKind::WhistNotAllowed,
                    "Half whist is not allowed after the other defender passed",
                ));
            }
            Ok(())
        }
    }
}

/// Whist decisions `defender` may still declare.
pub fn available_whists(state: &GameState, defender: &Username) -> Vec<WhistDecision> {
    [
        WhistDecision::Whist,
        WhistDecision::HalfWhist,
        WhistDecision::Pass,
    ]
    .into_iter()
    .filter(|d| validate_whist(state, defender, *d).is_ok())
    .collect()
}
