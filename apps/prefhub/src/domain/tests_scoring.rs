use crate::domain::contract::Contract;
use crate::domain::rules::{GameRules, ScoringRules};
use crate::domain::scoring::{apply_round_scoring, score_contract, ContractOutcome};
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::{seated_state, seated_state_with, u};
use crate::errors::domain::DomainError;

fn k(s: &str) -> Contract {
    s.parse().unwrap()
}

fn finished(mut state: GameState, declarer: &str, contract: &str, tricks: [u8; 3]) -> GameState {
    state.declarer = Some(u(declarer));
    state.contract = Some(k(contract));
    for (name, t) in ["ann", "bob", "cat"].into_iter().zip(tricks) {
        state.tricks_won.insert(u(name), t);
    }
    state
}

#[test]
fn six_spades_made_exactly() {
    let mut state = finished(seated_state(), "bob", "6S", [2, 6, 2]);
    let result = apply_round_scoring(&mut state).unwrap();

    assert!(result.made);
    assert_eq!(result.declarer_tricks, 6);
    let scores: Vec<i32> = state.players.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![2, 6, 2]);
    assert_eq!(state.players[1].bullet, 6);
    assert_eq!(state.players[1].mountain, 0);
}

#[test]
fn failed_contract_goes_to_the_mountain() {
    let mut state = finished(seated_state(), "ann", "8H", [7, 2, 1]);
    let result = apply_round_scoring(&mut state).unwrap();

    assert!(!result.made);
    assert_eq!(state.players[0].score, 0);
    assert_eq!(state.players[0].mountain, 8);
    assert_eq!(state.players[0].bullet, 0);
    assert_eq!(state.players[1].score, 2);
    assert_eq!(state.players[2].score, 1);
}

#[test]
fn miser_scores_ten_either_way() {
    let mut made = finished(seated_state(), "cat", "MISER", [6, 4, 0]);
    apply_round_scoring(&mut made).unwrap();
    assert_eq!(made.players[2].score, 10);
    assert_eq!(made.players[0].score, 6, "defenders still score");

    let mut failed = finished(seated_state(), "cat", "MISER", [5, 4, 1]);
    apply_round_scoring(&mut failed).unwrap();
    assert_eq!(failed.players[2].score, 0);
    assert_eq!(failed.players[2].mountain, 10);
}

#[test]
fn scoring_rules_change_outcomes() {
    let scoring = ScoringRules {
        trick_points_multiplier: 2,
        undertrick_penalty: 3,
        exact_contract_bonus: 1,
        miser_points: 15,
    };
    assert_eq!(
        score_contract(k("7D"), 7, &scoring),
        ContractOutcome {
            made: true,
            score: 15,
            mountain: 0
        }
    );
    assert_eq!(
        score_contract(k("7D"), 8, &scoring),
        ContractOutcome {
            made: true,
            score: 14,
            mountain: 0
        }
    );
    assert_eq!(
        score_contract(k("7D"), 6, &scoring),
        ContractOutcome {
            made: false,
            score: 0,
            mountain: 21
        }
    );
    assert_eq!(score_contract(Contract::Miser, 0, &scoring).score, 15);
}

#[test]
fn pool_disabled_leaves_bullet_alone() {
    let mut rules = GameRules::sochinka();
    rules.pool.enabled = false;
    let mut state = finished(seated_state_with(rules), "bob", "9NT", [0, 10, 0]);
    apply_round_scoring(&mut state).unwrap();
    assert_eq!(state.players[1].score, 9);
    assert_eq!(state.players[1].bullet, 0);
}

#[test]
fn streak_resets_on_made_contract() {
    let mut state = finished(seated_state(), "bob", "6S", [2, 6, 2]);
    state.all_pass_streak = 3;
    apply_round_scoring(&mut state).unwrap();
    assert_eq!(state.all_pass_streak, 0);
}

#[test]
fn streak_on_failure_depends_on_rules() {
    let mut state = finished(seated_state(), "bob", "7S", [4, 5, 1]);
    state.all_pass_streak = 2;
    apply_round_scoring(&mut state).unwrap();
    assert_eq!(state.all_pass_streak, 2);

    let mut state = finished(seated_state_with(GameRules::leningrad()), "bob", "7S", [4, 5, 1]);
    state.all_pass_streak = 2;
    apply_round_scoring(&mut state).unwrap();
    assert_eq!(state.all_pass_streak, 0);
}

#[test]
fn scoring_without_contract_is_illegal_state() {
    let mut state = seated_state();
    assert!(matches!(
        apply_round_scoring(&mut state),
        Err(DomainError::IllegalState(_))
    ));
}
