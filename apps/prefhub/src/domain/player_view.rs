//! What one player is allowed to see.
//!
//! [`project`] hides other players' hands and, outside the declarer's widow
//! exchange, the widow itself. It also precomputes the actions the viewer may
//! take right now, so transports never reimplement game rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::contract::Contract;
use crate::domain::scoring::RoundResult;
use crate::domain::state::{GameState, Phase, Username, WhistDecision};
use crate::domain::tricks::{legal_moves, Trick};
use crate::domain::validation::{available_bids, available_whists};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllowedAction {
    Bid { options: Vec<Contract> },
    ExchangeWidow,
    PlayCard { playable: Vec<Card> },
    DeclareWhist { options: Vec<WhistDecision> },
    StartNextRound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub username: Username,
    pub cards_in_hand: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub score: i32,
    pub mountain: i32,
    pub bullet: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub game_id: String,
    pub username: Username,
    pub phase: Phase,
    pub round_no: u32,
    pub rules_name: String,
    pub hand: Vec<Card>,
    pub opponents: Vec<OpponentView>,
    /// Every username in seat order.
    pub seating: Vec<Username>,
    pub dealer: Option<Username>,
    pub current_player: Option<Username>,
    pub is_your_turn: bool,
    pub allowed_actions: Vec<AllowedAction>,
    pub bids: BTreeMap<Username, Contract>,
    pub highest_bid: Option<Contract>,
    /// Only the declarer sees the widow, and only while exchanging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widow: Option<Vec<Card>>,
    pub contract: Option<Contract>,
    pub declarer: Option<Username>,
    pub trump: Option<Suit>,
    pub current_trick: Option<Trick>,
    pub last_trick: Option<Trick>,
    pub tricks_won: BTreeMap<Username, u8>,
    pub whists: BTreeMap<Username, WhistDecision>,
    pub scores: BTreeMap<Username, ScoreLine>,
    pub all_pass_streak: u32,
    pub last_round: Option<RoundResult>,
    pub pool_closed: bool,
    pub version: u64,
}

impl PlayerView {
    pub fn can(&self, pred: impl Fn(&AllowedAction) -> bool) -> bool {
        self.allowed_actions.iter().any(pred)
    }
}

fn allowed_actions(state: &GameState, seat: usize, username: &Username) -> Vec<AllowedAction> {
    let mut actions = Vec::new();
    let my_turn = state.current_player().map(|p| &p.username) == Some(username);

    match state.phase {
        Phase::Bidding if my_turn => actions.push(AllowedAction::Bid {
            options: available_bids(state),
        }),
        Phase::WidowExchange if state.is_declarer(username) => {
            actions.push(AllowedAction::ExchangeWidow)
        }
        Phase::Playing if my_turn => actions.push(AllowedAction::PlayCard {
            playable: legal_moves(state, seat),
        }),
        Phase::RoundComplete => actions.push(AllowedAction::StartNextRound),
        _ => {}
    }

    let whists = available_whists(state, username);
    if !whists.is_empty() {
        actions.push(AllowedAction::DeclareWhist { options: whists });
    }
    actions
}

/// Build the view of `state` for `username`.
pub fn project(state: &GameState, username: &Username) -> Result<PlayerView, DomainError> {
    let seat = state.require_seat(username)?;
    let me = &state.players[seat];

    let mut hand = me.hand.clone();
    hand.sort();

    let opponents = state
        .players
        .iter()
        .filter(|p| &p.username != username)
        .map(|p| OpponentView {
            username: p.username.clone(),
            cards_in_hand: p.hand.len(),
        })
        .collect();

    let widow = (state.phase == Phase::WidowExchange && state.is_declarer(username))
        .then(|| state.widow.clone());

    let current_player = state.current_player().map(|p| p.username.clone());
    let dealer = match state.phase {
        Phase::WaitingForPlayers => None,
        _ => state.players.get(state.dealer).map(|p| p.username.clone()),
    };

    let scores = state
        .players
        .iter()
        .map(|p| {
            (
                p.username.clone(),
                ScoreLine {
                    score: p.score,
                    mountain: p.mountain,
                    bullet: p.bullet,
                },
            )
        })
        .collect();

    Ok(PlayerView {
        game_id: state.game_id.clone(),
        username: username.clone(),
        phase: state.phase,
        round_no: state.round_no,
        rules_name: state.rules.name.clone(),
        hand,
        opponents,
        seating: state.players.iter().map(|p| p.username.clone()).collect(),
        dealer,
        is_your_turn: current_player.as_ref() == Some(username),
        current_player,
        allowed_actions: allowed_actions(state, seat, username),
        bids: state.bids.clone(),
        highest_bid: state.highest_bid(),
        widow,
        contract: state.contract,
        declarer: state.declarer.clone(),
        trump: state.contract.and_then(|c| c.trump_suit()),
        current_trick: state.current_trick.clone(),
        last_trick: state.completed_tricks.last().cloned(),
        tricks_won: state.tricks_won.clone(),
        whists: state.whists.clone(),
        scores,
        all_pass_streak: state.all_pass_streak,
        last_round: state.last_round.clone(),
        pool_closed: state.pool_closed(),
        version: state.version,
    })
}
