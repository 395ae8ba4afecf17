//! Aggregate root for one game.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::contract::Contract;
use super::rules::{GameRules, PLAYERS};
use super::scoring::RoundResult;
use super::tricks::Trick;
use super::Card;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Player identity. Unique within a game and used as the key of every
/// per-player map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::Other("EMPTY_USERNAME".into()),
                "Username must not be empty",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    WaitingForPlayers,
    Bidding,
    WidowExchange,
    Playing,
    RoundComplete,
    GameComplete,
}

/// A defender's answer to the declarer's contract.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WhistDecision {
    Whist,
    HalfWhist,
    Pass,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub username: Username,
    pub hand: Vec<Card>,
    /// Cumulative points.
    pub score: i32,
    /// Penalty ledger.
    pub mountain: i32,
    /// Pool ledger.
    pub bullet: i32,
}

impl Player {
    pub fn new(username: Username) -> Self {
        Self {
            username,
            hand: Vec::new(),
            score: 0,
            mountain: 0,
            bullet: 0,
        }
    }

    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: String,
    pub players: Vec<Player>,
    pub dealer: usize,
    pub current: usize,
    pub phase: Phase,
    pub widow: Vec<Card>,
    /// Cards the declarer put aside during the widow exchange.
    #[serde(default)]
    pub discards: Vec<Card>,
    pub bids: BTreeMap<Username, Contract>,
    pub declarer: Option<Username>,
    pub contract: Option<Contract>,
    pub current_trick: Option<Trick>,
    pub completed_tricks: Vec<Trick>,
    pub tricks_won: BTreeMap<Username, u8>,
    #[serde(default)]
    pub whists: BTreeMap<Username, WhistDecision>,
    pub round_no: u32,
    /// Consecutive all-pass deals since the last contract that reset it.
    #[serde(default)]
    pub all_pass_streak: u32,
    /// Deals performed so far, including all-pass redeals.
    #[serde(default)]
    pub deal_no: u32,
    pub rng_seed: u64,
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub last_round: Option<RoundResult>,
    pub rules: GameRules,
}

pub fn next_seat(seat: usize) -> usize {
    (seat + 1) % PLAYERS
}

impl GameState {
    pub fn new(game_id: impl Into<String>, rules: GameRules, rng_seed: u64) -> Self {
        Self {
            game_id: game_id.into(),
            players: Vec::with_capacity(PLAYERS),
            dealer: 0,
            current: 0,
            phase: Phase::WaitingForPlayers,
            widow: Vec::new(),
            discards: Vec::new(),
            bids: BTreeMap::new(),
            declarer: None,
            contract: None,
            current_trick: None,
            completed_tricks: Vec::new(),
            tricks_won: BTreeMap::new(),
            whists: BTreeMap::new(),
            round_no: 1,
            all_pass_streak: 0,
            deal_no: 0,
            rng_seed,
            version: 0,
            last_round: None,
            rules,
        }
    }

    pub fn is_full(&self) -> bool {
        self.players.len() == PLAYERS
    }

    pub fn player_index(&self, username: &Username) -> Option<usize> {
        self.players.iter().position(|p| &p.username == username)
    }

    pub fn require_seat(&self, username: &Username) -> Result<usize, DomainError> {
        self.player_index(username).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("{username} is not seated at game {}", self.game_id),
            )
        })
    }

    pub fn player(&self, username: &Username) -> Option<&Player> {
        self.players.iter().find(|p| &p.username == username)
    }

    /// The player expected to act, if the game has started.
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::WaitingForPlayers | Phase::RoundComplete | Phase::GameComplete => None,
            _ => self.players.get(self.current),
        }
    }

    pub fn require_phase(&self, expected: Phase, action: &str) -> Result<(), DomainError> {
        if self.phase != expected {
            return Err(DomainError::illegal_state(format!(
                "{action} requires phase {expected:?}, game is in {:?}",
                self.phase
            )));
        }
        Ok(())
    }

    /// Reject anyone but the current player.
    pub fn require_turn(&self, seat: usize) -> Result<(), DomainError> {
        if seat != self.current {
            let expected = self
                .players
                .get(self.current)
                .map(|p| p.username.to_string())
                .unwrap_or_default();
            return Err(DomainError::illegal_turn(format!(
                "It is {expected}'s turn"
            )));
        }
        Ok(())
    }

    pub fn is_declarer(&self, username: &Username) -> bool {
        self.declarer.as_ref() == Some(username)
    }

    /// Defenders of the current contract, in seat order.
    pub fn defenders(&self) -> Vec<&Username> {
        match &self.declarer {
            Some(declarer) => self
                .players
                .iter()
                .map(|p| &p.username)
                .filter(|u| *u != declarer)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Highest non-pass bid placed so far.
    pub fn highest_bid(&self) -> Option<Contract> {
        self.bids
            .values()
            .copied()
            .filter(|c| !c.is_pass())
            .fold(None, |best, c| match best {
                Some(b) if !c.is_higher_than(b) => Some(b),
                _ => Some(c),
            })
    }

    /// True when the pool is on and every bullet has reached the pool size.
    pub fn pool_closed(&self) -> bool {
        self.rules.pool.enabled
            && self.is_full()
            && self
                .players
                .iter()
                .all(|p| p.bullet >= self.rules.pool.size)
    }

    /// Drop everything that belongs to a single deal. Scores survive.
    pub(crate) fn clear_deal(&mut self) {
        for player in &mut self.players {
            player.hand.clear();
        }
        self.widow.clear();
        self.discards.clear();
        self.bids.clear();
        self.declarer = None;
        self.contract = None;
        self.current_trick = None;
        self.completed_tricks.clear();
        self.tricks_won.clear();
        self.whists.clear();
    }

    /// Per-round reset: clears the deal, rotates the dealer and bumps the
    /// round number.
    pub fn next_round(&mut self) {
        self.clear_deal();
        self.dealer = next_seat(self.dealer);
        self.round_no += 1;
    }
}
