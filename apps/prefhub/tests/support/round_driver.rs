//! Helpers that push a seated game through a round.

use prefhub::domain::scoring::RoundResult;
use prefhub::{AllowedAction, Contract, GameFlowService, Phase};

/// First bidder takes `contract`, the other two pass, and the declarer
/// discards the two lowest cards of hand plus widow. Returns the declarer.
pub fn bid_and_win(service: &GameFlowService, game_id: &str, contract: Contract) -> String {
    let state = service.get_game(game_id).expect("game");
    assert_eq!(state.phase, Phase::Bidding);
    let first = state.current;
    let order: Vec<String> = (0..3)
        .map(|i| state.players[(first + i) % 3].username.to_string())
        .collect();

    service
        .place_bid(game_id, &order[0], contract)
        .expect("opening bid");
    service
        .place_bid(game_id, &order[1], Contract::Pass)
        .expect("second pass");
    service
        .place_bid(game_id, &order[2], Contract::Pass)
        .expect("third pass");

    let view = service
        .get_player_view(game_id, &order[0])
        .expect("declarer view");
    assert_eq!(view.phase, Phase::WidowExchange);
    let mut pool = view.hand.clone();
    pool.extend(view.widow.clone().expect("declarer sees widow"));
    pool.sort();
    service
        .exchange_widow(game_id, &order[0], &pool[..2])
        .expect("exchange widow");

    order[0].clone()
}

/// Play every remaining trick, each player choosing their first legal card.
pub fn play_out_round(service: &GameFlowService, game_id: &str) -> RoundResult {
    loop {
        let state = service.get_game(game_id).expect("game");
        match state.phase {
            Phase::Playing => {
                let player = state.current_player().expect("someone to play");
                let view = service
                    .get_player_view(game_id, player.username.as_str())
                    .expect("view");
                let card = view
                    .allowed_actions
                    .iter()
                    .find_map(|a| match a {
                        AllowedAction::PlayCard { playable } => playable.first().copied(),
                        _ => None,
                    })
                    .expect("a playable card");
                service
                    .play_card(game_id, player.username.as_str(), card)
                    .expect("play card");
            }
            Phase::RoundComplete => return state.last_round.expect("round result"),
            other => panic!("unexpected phase while playing out: {other:?}"),
        }
    }
}
