use crate::domain::bidding::{auction_winner, is_bidding_complete, place_bid, BidOutcome};
use crate::domain::contract::Contract;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{bidding_state, u};
use crate::errors::domain::{DomainError, MoveKind};

fn k(s: &str) -> Contract {
    s.parse().unwrap()
}

#[test]
fn first_bidder_is_left_of_dealer() {
    let state = bidding_state();
    assert_eq!(state.dealer, 0);
    assert_eq!(state.current, 1);
    assert_eq!(state.phase, Phase::Bidding);
    for p in &state.players {
        assert_eq!(p.hand.len(), 10);
    }
    assert_eq!(state.widow.len(), 2);
}

#[test]
fn one_bid_and_two_passes_makes_a_declarer() {
    let mut state = bidding_state();
    assert_eq!(
        place_bid(&mut state, &u("bob"), k("6S")).unwrap(),
        BidOutcome::Continue
    );
    place_bid(&mut state, &u("cat"), Contract::Pass).unwrap();
    let outcome = place_bid(&mut state, &u("ann"), Contract::Pass).unwrap();

    assert_eq!(
        outcome,
        BidOutcome::Won {
            declarer: u("bob"),
            contract: k("6S")
        }
    );
    assert_eq!(state.phase, Phase::WidowExchange);
    assert_eq!(state.declarer, Some(u("bob")));
    assert_eq!(state.contract, Some(k("6S")));
    assert_eq!(state.current, 1);
}

#[test]
fn lone_bid_wins_from_any_auction_position() {
    // Auction order is bob, cat, ann; seats 1, 2, 0.
    let order = ["bob", "cat", "ann"];
    let seats = [1, 2, 0];
    for position in 0..3 {
        let mut state = bidding_state();
        let mut last = BidOutcome::Continue;
        for (i, name) in order.iter().enumerate() {
            let bid = if i == position { k("7C") } else { Contract::Pass };
            last = place_bid(&mut state, &u(name), bid).unwrap();
        }

        let declarer = u(order[position]);
        assert_eq!(
            last,
            BidOutcome::Won {
                declarer: declarer.clone(),
                contract: k("7C")
            },
            "bid at position {position}"
        );
        assert_eq!(state.phase, Phase::WidowExchange);
        assert_eq!(state.declarer, Some(declarer));
        assert_eq!(state.contract, Some(k("7C")));
        assert_eq!(state.current, seats[position]);
        assert_eq!(state.all_pass_streak, 0);
    }
}

#[test]
fn three_passes_redeal_same_round_same_dealer() {
    let mut state = bidding_state();
    let first_hand = state.players[0].hand.clone();

    place_bid(&mut state, &u("bob"), Contract::Pass).unwrap();
    place_bid(&mut state, &u("cat"), Contract::Pass).unwrap();
    let outcome = place_bid(&mut state, &u("ann"), Contract::Pass).unwrap();

    assert_eq!(outcome, BidOutcome::AllPass);
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.declarer, None);
    assert_eq!(state.round_no, 1);
    assert_eq!(state.dealer, 0);
    assert_eq!(state.current, 1);
    assert_eq!(state.all_pass_streak, 1);
    assert_eq!(state.deal_no, 2);
    assert!(state.bids.is_empty());
    assert_ne!(state.players[0].hand, first_hand, "cards are redealt");
}

#[test]
fn competing_bids_keep_the_auction_open_and_skip_passers() {
    let mut state = bidding_state();
    place_bid(&mut state, &u("bob"), k("6S")).unwrap();
    place_bid(&mut state, &u("cat"), k("6C")).unwrap();
    place_bid(&mut state, &u("ann"), Contract::Pass).unwrap();
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.current, 1, "bob answers cat's raise");

    place_bid(&mut state, &u("bob"), k("7S")).unwrap();
    assert_eq!(state.current, 2, "ann passed and is skipped");

    let outcome = place_bid(&mut state, &u("cat"), Contract::Pass).unwrap();
    assert_eq!(
        outcome,
        BidOutcome::Won {
            declarer: u("bob"),
            contract: k("7S")
        }
    );
}

#[test]
fn rejected_bid_leaves_state_untouched() {
    let mut state = bidding_state();
    place_bid(&mut state, &u("bob"), k("7H")).unwrap();
    let before = state.clone();

    let err = place_bid(&mut state, &u("cat"), k("7S")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalMove(MoveKind::BidNotHigher, _)
    ));
    assert_eq!(state, before);
}

#[test]
fn out_of_turn_and_wrong_phase_are_rejected() {
    let mut state = bidding_state();
    let err = place_bid(&mut state, &u("ann"), Contract::Pass).unwrap_err();
    assert!(matches!(err, DomainError::IllegalTurn(_)));

    state.phase = Phase::Playing;
    let err = place_bid(&mut state, &u("bob"), Contract::Pass).unwrap_err();
    assert!(matches!(err, DomainError::IllegalState(_)));
}

#[test]
fn completion_and_winner_helpers() {
    let mut bids = std::collections::BTreeMap::new();
    bids.insert(u("ann"), Contract::Pass);
    bids.insert(u("bob"), k("8D"));
    assert!(!is_bidding_complete(&bids));
    bids.insert(u("cat"), Contract::Miser);
    assert!(!is_bidding_complete(&bids));
    assert_eq!(auction_winner(&bids), Some((u("bob"), k("8D"))));
    bids.insert(u("cat"), Contract::Pass);
    assert!(is_bidding_complete(&bids));
}
