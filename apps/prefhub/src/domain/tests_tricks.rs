use crate::domain::contract::Contract;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{cards, full_hands, playing_state, u, NAMES};
use crate::domain::tricks::{legal_moves, play_card, Trick};
use crate::domain::Suit;
use crate::errors::domain::{DomainError, MoveKind};

fn k(s: &str) -> Contract {
    s.parse().unwrap()
}

fn c(s: &str) -> crate::domain::Card {
    s.parse().unwrap()
}

#[test]
fn trick_winner_highest_trump_then_lead() {
    let mut trick = Trick::new(u("ann"));
    trick.play(u("ann"), c("AH"));
    trick.play(u("bob"), c("7S"));
    trick.play(u("cat"), c("9S"));
    assert_eq!(trick.lead_suit, Some(Suit::Hearts));
    assert_eq!(trick.winner(Some(Suit::Spades)), Some(&u("cat")));
    assert_eq!(trick.winner(None), Some(&u("ann")));
    assert_eq!(trick.winner(Some(Suit::Clubs)), Some(&u("ann")));
}

#[test]
fn off_suit_non_trump_never_wins() {
    let mut trick = Trick::new(u("ann"));
    trick.play(u("ann"), c("7D"));
    trick.play(u("bob"), c("AC"));
    trick.play(u("cat"), c("AH"));
    assert_eq!(trick.winner(Some(Suit::Spades)), Some(&u("ann")));
    assert!(Trick::new(u("ann")).winner(None).is_none());
}

#[test]
fn must_follow_then_trump_then_anything() {
    let mut state = playing_state(
        [&["AH", "7C"], &["KH", "8S", "9D"], &["7S", "9C"]],
        "ann",
        k("6S"),
        0,
    );
    play_card(&mut state, &u("ann"), c("AH")).unwrap();

    assert_eq!(legal_moves(&state, 1), cards(&["KH"]));
    let err = play_card(&mut state, &u("bob"), c("8S")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalMove(MoveKind::MustFollowSuit, _)
    ));
    play_card(&mut state, &u("bob"), c("KH")).unwrap();

    assert_eq!(legal_moves(&state, 2), cards(&["7S"]), "void in lead must trump");
}

#[test]
fn follow_suit_can_be_disabled() {
    let mut state = playing_state([&["AH"], &["KH", "8S"], &["7C"]], "ann", k("6S"), 0);
    state.rules.follow_suit = false;
    play_card(&mut state, &u("ann"), c("AH")).unwrap();
    play_card(&mut state, &u("bob"), c("8S")).unwrap();
}

#[test]
fn card_not_in_hand_and_out_of_turn() {
    let mut state = playing_state([&["AH"], &["KH"], &["QH"]], "ann", k("6NT"), 0);
    let before = state.clone();
    let err = play_card(&mut state, &u("ann"), c("AS")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalMove(MoveKind::CardNotInHand, _)
    ));
    let err = play_card(&mut state, &u("bob"), c("KH")).unwrap_err();
    assert!(matches!(err, DomainError::IllegalTurn(_)));
    assert_eq!(state, before);
}

#[test]
fn completed_trick_credits_winner_who_leads_next() {
    let mut state = playing_state(
        [&["7H", "8C"], &["AH", "9C"], &["KH", "TC"]],
        "ann",
        k("6NT"),
        0,
    );
    play_card(&mut state, &u("ann"), c("7H")).unwrap();
    play_card(&mut state, &u("bob"), c("AH")).unwrap();
    let result = play_card(&mut state, &u("cat"), c("KH")).unwrap();

    assert_eq!(result.trick_winner, Some(u("bob")));
    assert!(!result.round_complete);
    assert_eq!(state.tricks_won.get(&u("bob")), Some(&1));
    assert_eq!(state.completed_tricks.len(), 1);
    assert_eq!(state.current, 1);
    assert_eq!(
        state.current_trick.as_ref().map(|t| t.leader.clone()),
        Some(u("bob"))
    );
}

#[test]
fn tenth_trick_scores_and_completes_round() {
    let hands = full_hands();
    let mut state = playing_state([&[], &[], &[]], "ann", k("6S"), 0);
    for (player, hand) in state.players.iter_mut().zip(hands) {
        player.hand = hand;
    }

    let mut tricks = 0;
    while state.phase == Phase::Playing {
        let seat = state.current;
        let card = legal_moves(&state, seat)[0];
        let who = u(NAMES[seat]);
        let result = play_card(&mut state, &who, card).unwrap();
        if result.trick_winner.is_some() {
            tricks += 1;
        }
    }

    assert_eq!(tricks, 10);
    assert_eq!(state.phase, Phase::RoundComplete);
    assert_eq!(state.completed_tricks.len(), 10);
    assert_eq!(state.tricks_won.values().map(|&t| t as u32).sum::<u32>(), 10);
    assert!(state.current_trick.is_none());
    assert!(state.last_round.is_some());
    assert!(state.players.iter().all(|p| p.hand.is_empty()));
}
