//! End-of-round scoring. All arithmetic goes through `ScoringRules`.

use serde::{Deserialize, Serialize};

use crate::domain::contract::Contract;
use crate::domain::rules::{GameRules, ScoringRules};
use crate::domain::state::{GameState, Username};
use crate::errors::domain::DomainError;

/// Declarer outcome for a finished contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractOutcome {
    pub made: bool,
    pub score: i32,
    pub mountain: i32,
}

/// Score a contract from the declarer's trick count.
pub fn score_contract(contract: Contract, tricks: u8, scoring: &ScoringRules) -> ContractOutcome {
    if contract.is_miser() {
        let made = tricks == 0;
        return ContractOutcome {
            made,
            score: if made { scoring.miser_points } else { 0 },
            mountain: if made { 0 } else { scoring.miser_points },
        };
    }

    let required = i32::from(contract.required_tricks());
    if tricks >= contract.required_tricks() {
        let bonus = if tricks == contract.required_tricks() {
            scoring.exact_contract_bonus
        } else {
            0
        };
        ContractOutcome {
            made: true,
            score: required * scoring.trick_points_multiplier + bonus,
            mountain: 0,
        }
    } else {
        ContractOutcome {
            made: false,
            score: 0,
            mountain: required * scoring.undertrick_penalty,
        }
    }
}

/// Points a defender earns for the tricks they took.
pub fn defender_points(tricks: u8, scoring: &ScoringRules) -> i32 {
    i32::from(tricks) * scoring.trick_points_multiplier
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub username: Username,
    pub tricks: u8,
    pub score: i32,
    pub mountain: i32,
    pub bullet: i32,
}

/// Summary of a scored round, kept on the state for the next view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_no: u32,
    pub contract: Contract,
    pub declarer: Username,
    pub declarer_tricks: u8,
    pub made: bool,
    pub deltas: Vec<ScoreDelta>,
}

fn resets_streak(rules: &GameRules, made: bool) -> bool {
    made || rules.mizer_exit_on_failed_contract
}

/// Apply end-of-round scoring to every player and return what changed.
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundResult, DomainError> {
    let (Some(declarer), Some(contract)) = (state.declarer.clone(), state.contract) else {
        return Err(DomainError::illegal_state(
            "Cannot score a round without declarer and contract",
        ));
    };

    let scoring = state.rules.scoring.clone();
    let pool_enabled = state.rules.pool.enabled;
    let declarer_tricks = state.tricks_won.get(&declarer).copied().unwrap_or(0);
    let outcome = score_contract(contract, declarer_tricks, &scoring);

    let mut deltas = Vec::with_capacity(state.players.len());
    for player in &mut state.players {
        let tricks = state.tricks_won.get(&player.username).copied().unwrap_or(0);
        let delta = if player.username == declarer {
            ScoreDelta {
                username: player.username.clone(),
                tricks,
                score: outcome.score,
                mountain: outcome.mountain,
                bullet: if pool_enabled { outcome.score } else { 0 },
            }
        } else {
            ScoreDelta {
                username: player.username.clone(),
                tricks,
                score: defender_points(tricks, &scoring),
                mountain: 0,
                bullet: 0,
            }
        };
        player.score += delta.score;
        player.mountain += delta.mountain;
        player.bullet += delta.bullet;
        deltas.push(delta);
    }

    if resets_streak(&state.rules, outcome.made) {
        state.all_pass_streak = 0;
    }

    Ok(RoundResult {
        round_no: state.round_no,
        contract,
        declarer,
        declarer_tricks,
        made: outcome.made,
        deltas,
    })
}
