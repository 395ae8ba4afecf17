use crate::domain::contract::Contract;
use crate::domain::rules::{GameRules, MizerExitType, TenGameMode};
use crate::domain::state::{Phase, WhistDecision};
use crate::domain::test_state_helpers::{bidding_state, seated_state, u};
use crate::domain::validation::{
    available_bids, available_whists, can_exit_mizer, required_exit_tricks, validate_bid,
    validate_whist,
};
use crate::domain::whist::declare_whist;
use crate::errors::domain::{ConflictKind, DomainError, MoveKind};

fn k(s: &str) -> Contract {
    s.parse().unwrap()
}

fn move_kind(err: DomainError) -> MoveKind {
    match err {
        DomainError::IllegalMove(kind, _) => kind,
        other => panic!("expected IllegalMove, got {other:?}"),
    }
}

#[test]
fn pass_is_always_legal() {
    let mut state = bidding_state();
    state.bids.insert(u("bob"), k("10NT"));
    state.all_pass_streak = 5;
    assert!(validate_bid(&state, Contract::Pass).is_ok());
}

#[test]
fn minimum_opening_level_is_enforced_not_clamped() {
    let mut rules = GameRules::sochinka();
    rules.minimum_opening_bid = 7;
    let mut state = seated_state();
    state.rules = rules;
    state.phase = Phase::Bidding;

    assert_eq!(
        move_kind(validate_bid(&state, k("6NT")).unwrap_err()),
        MoveKind::BidBelowMinimum
    );
    assert!(validate_bid(&state, k("7S")).is_ok());
    assert!(validate_bid(&state, Contract::Miser).is_ok());
}

#[test]
fn bids_must_beat_the_current_maximum() {
    let mut state = bidding_state();
    state.bids.insert(u("bob"), Contract::Miser);
    assert_eq!(
        move_kind(validate_bid(&state, k("7NT")).unwrap_err()),
        MoveKind::BidNotHigher
    );
    assert_eq!(
        move_kind(validate_bid(&state, Contract::Miser).unwrap_err()),
        MoveKind::BidNotHigher
    );
    assert!(validate_bid(&state, k("8S")).is_ok());
}

#[test]
fn available_bids_lists_pass_and_every_legal_contract() {
    let mut state = bidding_state();
    assert_eq!(available_bids(&state).len(), 27);

    state.bids.insert(u("bob"), k("9NT"));
    assert_eq!(
        available_bids(&state),
        vec![
            Contract::Pass,
            k("10S"),
            k("10C"),
            k("10D"),
            k("10H"),
            k("10NT")
        ]
    );
}

#[test]
fn exit_levels_per_policy() {
    use MizerExitType::*;
    let flat: Vec<u8> = (1..=4).map(|s| required_exit_tricks(Flat6, s)).collect();
    let e678: Vec<u8> = (1..=4).map(|s| required_exit_tricks(Escalating678, s)).collect();
    let e677: Vec<u8> = (1..=4).map(|s| required_exit_tricks(Escalating677, s)).collect();
    assert_eq!(flat, vec![6, 6, 6, 6]);
    assert_eq!(e678, vec![6, 7, 8, 8]);
    assert_eq!(e677, vec![6, 7, 7, 7]);
}

#[test]
fn all_pass_streak_raises_the_floor() {
    let mut state = bidding_state();
    state.rules.mizer_exit = MizerExitType::Escalating678;
    state.all_pass_streak = 3;

    assert!(!can_exit_mizer(&state, k("7NT")));
    assert!(can_exit_mizer(&state, k("8S")));
    assert_eq!(
        move_kind(validate_bid(&state, k("7H")).unwrap_err()),
        MoveKind::BidBelowExitLevel
    );

    state.rules.allow_miser_exit = false;
    assert!(!can_exit_mizer(&state, Contract::Miser));
    assert_eq!(
        move_kind(validate_bid(&state, Contract::Miser).unwrap_err()),
        MoveKind::BidBelowExitLevel
    );

    state.all_pass_streak = 0;
    assert!(can_exit_mizer(&state, Contract::Miser));
}

fn whist_state(contract: &str) -> crate::domain::state::GameState {
    let mut state = seated_state();
    state.phase = Phase::WidowExchange;
    state.declarer = Some(u("ann"));
    state.contract = Some(k(contract));
    state
}

#[test]
fn only_defenders_whist_and_only_once() {
    let mut state = whist_state("7H");
    assert_eq!(
        move_kind(validate_whist(&state, &u("ann"), WhistDecision::Whist).unwrap_err()),
        MoveKind::WhistNotAllowed
    );

    declare_whist(&mut state, &u("bob"), WhistDecision::Whist).unwrap();
    let err = declare_whist(&mut state, &u("bob"), WhistDecision::Pass).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::WhistAlreadyDeclared, _)
    ));
    assert_eq!(state.whists.get(&u("bob")), Some(&WhistDecision::Whist));
}

#[test]
fn six_spades_and_checked_ten_cannot_be_passed() {
    let state = whist_state("6S");
    assert!(validate_whist(&state, &u("bob"), WhistDecision::Pass).is_err());
    assert!(validate_whist(&state, &u("bob"), WhistDecision::Whist).is_ok());

    let mut state = whist_state("10D");
    assert!(validate_whist(&state, &u("cat"), WhistDecision::Pass).is_err());
    state.rules.ten_game_mode = TenGameMode::Whisted;
    assert!(validate_whist(&state, &u("cat"), WhistDecision::Pass).is_ok());
}

#[test]
fn no_whist_on_miser() {
    let state = whist_state("MISER");
    assert!(available_whists(&state, &u("bob")).is_empty());
}

#[test]
fn half_whist_follows_rules() {
    let mut state = whist_state("7C");
    state.rules.allow_half_whist_after_pass = false;
    assert!(validate_whist(&state, &u("cat"), WhistDecision::HalfWhist).is_ok());

    declare_whist(&mut state, &u("bob"), WhistDecision::Pass).unwrap();
    assert!(validate_whist(&state, &u("cat"), WhistDecision::HalfWhist).is_err());

    state.rules.allow_half_whist_after_pass = true;
    assert!(validate_whist(&state, &u("cat"), WhistDecision::HalfWhist).is_ok());

    state.rules.allow_half_whist = false;
    assert_eq!(
        available_whists(&state, &u("cat")),
        vec![WhistDecision::Whist, WhistDecision::Pass]
    );
}

#[test]
fn whist_window_closes_after_first_trick() {
    let mut state = whist_state("7C");
    state.phase = Phase::Playing;
    assert!(validate_whist(&state, &u("bob"), WhistDecision::Whist).is_ok());

    let trick = crate::domain::tricks::Trick::new(u("ann"));
    state.completed_tricks.push(trick);
    assert!(matches!(
        validate_whist(&state, &u("bob"), WhistDecision::Whist),
        Err(DomainError::IllegalState(_))
    ));
}
