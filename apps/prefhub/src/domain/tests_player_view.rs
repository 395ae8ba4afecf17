use crate::domain::bidding::place_bid;
use crate::domain::contract::Contract;
use crate::domain::player_view::{project, AllowedAction};
use crate::domain::state::{Phase, WhistDecision};
use crate::domain::test_state_helpers::{bidding_state, seated_state, u};
use crate::errors::domain::{DomainError, NotFoundKind};

fn k(s: &str) -> Contract {
    s.parse().unwrap()
}

#[test]
fn hides_other_hands_and_shows_counts() {
    let state = bidding_state();
    let view = project(&state, &u("ann")).unwrap();

    assert_eq!(view.hand.len(), 10);
    assert!(view.hand.windows(2).all(|w| w[0] <= w[1]), "hand is sorted");
    assert_eq!(view.opponents.len(), 2);
    assert!(view.opponents.iter().all(|o| o.cards_in_hand == 10));
    assert!(view.widow.is_none());

    let json = serde_json::to_value(&view).unwrap();
    let bob_card = state.players[1].hand[0].to_string();
    assert!(!json.to_string().contains(&format!("\"{bob_card}\"")));
}

#[test]
fn bidding_turn_lists_bid_options() {
    let state = bidding_state();
    let bob = project(&state, &u("bob")).unwrap();
    assert!(bob.is_your_turn);
    assert_eq!(bob.current_player, Some(u("bob")));
    assert!(bob.can(|a| matches!(a, AllowedAction::Bid { options } if options.len() == 27)));

    let ann = project(&state, &u("ann")).unwrap();
    assert!(!ann.is_your_turn);
    assert!(ann.allowed_actions.is_empty());
}

#[test]
fn only_the_declarer_sees_the_widow() {
    let mut state = bidding_state();
    place_bid(&mut state, &u("bob"), k("7D")).unwrap();
    place_bid(&mut state, &u("cat"), Contract::Pass).unwrap();
    place_bid(&mut state, &u("ann"), Contract::Pass).unwrap();
    assert_eq!(state.phase, Phase::WidowExchange);

    let bob = project(&state, &u("bob")).unwrap();
    assert_eq!(bob.widow.as_ref().map(Vec::len), Some(2));
    assert!(bob.can(|a| matches!(a, AllowedAction::ExchangeWidow)));
    assert_eq!(bob.contract, Some(k("7D")));
    assert_eq!(bob.trump, Some(crate::domain::Suit::Diamonds));

    let cat = project(&state, &u("cat")).unwrap();
    assert!(cat.widow.is_none());
    assert!(cat.can(|a| matches!(
        a,
        AllowedAction::DeclareWhist { options } if options.contains(&WhistDecision::Whist)
    )));
}

#[test]
fn unknown_viewer_is_not_found() {
    let state = seated_state();
    let err = project(&state, &u("zed")).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
}

#[test]
fn waiting_view_has_no_turn_or_dealer() {
    let mut state = seated_state();
    state.players.truncate(2);
    let view = project(&state, &u("ann")).unwrap();
    assert_eq!(view.phase, Phase::WaitingForPlayers);
    assert_eq!(view.current_player, None);
    assert_eq!(view.dealer, None);
    assert!(!view.pool_closed);
}
