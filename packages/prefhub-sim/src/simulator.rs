//! Seeded random self-play through the public engine API.

use std::collections::BTreeMap;

use prefhub::domain::scoring::RoundResult;
use prefhub::{AllowedAction, Card, Contract, DomainError, GameFlowService, Phase, Username};
use rand::seq::IndexedRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

pub const SEATS: [&str; 3] = ["north", "east", "west"];

/// Upper bound on engine calls per round; a random auction can in principle
/// keep passing forever.
const MAX_STEPS_PER_ROUND: usize = 2_000;

#[derive(Debug, Serialize)]
pub struct FinalScore {
    pub username: Username,
    pub score: i32,
    pub mountain: i32,
    pub bullet: i32,
}

#[derive(Debug, Serialize)]
pub struct MatchSummary {
    pub game_id: String,
    pub variant: String,
    pub redeals: u32,
    pub rounds: Vec<RoundResult>,
    pub final_scores: Vec<FinalScore>,
    pub pool_closed: bool,
}

pub struct Simulator<'a> {
    service: &'a GameFlowService,
    rng: ChaCha8Rng,
    /// Probability that a bidder passes when they could bid.
    pass_bias: f64,
}

impl<'a> Simulator<'a> {
    pub fn new(service: &'a GameFlowService, rng: ChaCha8Rng, pass_bias: f64) -> Self {
        Self {
            service,
            rng,
            pass_bias,
        }
    }

    /// Create `game_id`, seat three players and play `rounds` scored rounds.
    pub fn play_match(
        &mut self,
        game_id: &str,
        variant: Option<&str>,
        rounds: u32,
    ) -> Result<MatchSummary, DomainError> {
        let created = self.service.create_game(game_id, variant)?;
        for seat in SEATS {
            self.service.join_game(game_id, seat)?;
        }

        let mut results = Vec::new();
        let mut redeals = 0;
        for round in 1..=rounds {
            let (result, round_redeals) = self.play_round(game_id)?;
            redeals += round_redeals;
            info!(
                game_id,
                round_no = result.round_no,
                declarer = %result.declarer,
                contract = %result.contract,
                declarer_tricks = result.declarer_tricks,
                made = result.made,
                "Round finished"
            );
            results.push(result);
            if round < rounds {
                self.service.start_next_round(game_id)?;
            }
        }

        let state = self.service.get_game(game_id)?;
        Ok(MatchSummary {
            game_id: game_id.to_string(),
            variant: created.rules.name,
            redeals,
            rounds: results,
            final_scores: state
                .players
                .iter()
                .map(|p| FinalScore {
                    username: p.username.clone(),
                    score: p.score,
                    mountain: p.mountain,
                    bullet: p.bullet,
                })
                .collect(),
            pool_closed: state.pool_closed(),
        })
    }

    /// Drive one round to ROUND_COMPLETE. Returns its result and the number
    /// of all-pass redeals it took to get a contract.
    fn play_round(&mut self, game_id: &str) -> Result<(RoundResult, u32), DomainError> {
        let mut redeals = 0;
        for _ in 0..MAX_STEPS_PER_ROUND {
            let state = self.service.get_game(game_id)?;
            match state.phase {
                Phase::Bidding => {
                    let bidder = current_username(&state)?;
                    let outcome = self.bid(game_id, &bidder)?;
                    if outcome.final_game.deal_no > state.deal_no {
                        redeals += 1;
                    }
                }
                Phase::WidowExchange => {
                    self.declare_whists(game_id, &state.players)?;
                    let declarer = state
                        .declarer
                        .clone()
                        .ok_or_else(|| DomainError::illegal_state("Widow exchange without declarer"))?;
                    self.exchange(game_id, &declarer)?;
                }
                Phase::Playing => {
                    let player = current_username(&state)?;
                    self.play(game_id, &player)?;
                }
                Phase::RoundComplete => {
                    let result = state
                        .last_round
                        .ok_or_else(|| DomainError::illegal_state("Round complete without result"))?;
                    return Ok((result, redeals));
                }
                Phase::WaitingForPlayers | Phase::GameComplete => {
                    return Err(DomainError::illegal_state(format!(
                        "Cannot simulate from phase {:?}",
                        state.phase
                    )));
                }
            }
        }
        Err(DomainError::illegal_state(format!(
            "Round did not finish within {MAX_STEPS_PER_ROUND} steps"
        )))
    }

    fn bid(
        &mut self,
        game_id: &str,
        bidder: &Username,
    ) -> Result<prefhub::GameFlowMutationResult, DomainError> {
        let options = self.service.available_bids(game_id)?;
        let contract = if self.rng.random_bool(self.pass_bias) {
            Contract::Pass
        } else {
            options.choose(&mut self.rng).copied().unwrap_or(Contract::Pass)
        };
        debug!(game_id, bidder = %bidder, %contract, "Bidding");
        self.service.place_bid(game_id, bidder.as_str(), contract)
    }

    fn declare_whists(
        &mut self,
        game_id: &str,
        players: &[prefhub::domain::Player],
    ) -> Result<(), DomainError> {
        for player in players {
            let view = self.service.get_player_view(game_id, player.username.as_str())?;
            let options = view.allowed_actions.iter().find_map(|a| match a {
                AllowedAction::DeclareWhist { options } => Some(options.clone()),
                _ => None,
            });
            if let Some(decision) = options.and_then(|o| o.choose(&mut self.rng).copied()) {
                self.service
                    .declare_whist(game_id, player.username.as_str(), decision)?;
            }
        }
        Ok(())
    }

    fn exchange(&mut self, game_id: &str, declarer: &Username) -> Result<(), DomainError> {
        let view = self.service.get_player_view(game_id, declarer.as_str())?;
        let mut pool: Vec<Card> = view.hand;
        pool.extend(view.widow.unwrap_or_default());
        let discards: Vec<Card> = pool.choose_multiple(&mut self.rng, 2).copied().collect();
        self.service
            .exchange_widow(game_id, declarer.as_str(), &discards)?;
        Ok(())
    }

    fn play(&mut self, game_id: &str, player: &Username) -> Result<(), DomainError> {
        let view = self.service.get_player_view(game_id, player.as_str())?;
        let card = view
            .allowed_actions
            .iter()
            .find_map(|a| match a {
                AllowedAction::PlayCard { playable } => playable.choose(&mut self.rng).copied(),
                _ => None,
            })
            .ok_or_else(|| DomainError::illegal_state(format!("{player} has no playable card")))?;
        self.service.play_card(game_id, player.as_str(), card)?;
        Ok(())
    }
}

fn current_username(state: &prefhub::GameState) -> Result<Username, DomainError> {
    state
        .current_player()
        .map(|p| p.username.clone())
        .ok_or_else(|| DomainError::illegal_state("No player to act"))
}

/// Running totals across every simulated match.
#[derive(Debug, Default)]
pub struct Tally {
    pub matches: u32,
    pub rounds: u32,
    pub made: u32,
    pub redeals: u32,
    pub contracts: BTreeMap<String, u32>,
}

impl Tally {
    pub fn record(&mut self, summary: &MatchSummary) {
        self.matches += 1;
        self.redeals += summary.redeals;
        for round in &summary.rounds {
            self.rounds += 1;
            if round.made {
                self.made += 1;
            }
            *self.contracts.entry(round.contract.to_string()).or_default() += 1;
        }
    }
}
