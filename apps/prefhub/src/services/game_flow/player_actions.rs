use tracing::{debug, info};

use crate::domain::bidding::{self, BidOutcome};
use crate::domain::game_transition::GameTransition;
use crate::domain::state::{Username, WhistDecision};
use crate::domain::{tricks, whist, widow, Card, Contract};
use crate::errors::domain::DomainError;
use crate::services::game_flow::{GameFlowMutationResult, GameFlowService};

impl GameFlowService {
    /// Submit a bid for the current bidder.
    pub fn place_bid(
        &self,
        game_id: &str,
        username: &str,
        contract: Contract,
    ) -> Result<GameFlowMutationResult, DomainError> {
        let username = Username::parse(username)?;
        debug!(game_id, username = %username, %contract, "Submitting bid");

        let mut outcome = BidOutcome::Continue;
        let result = self.run_mutation(game_id, "place_bid", |state| {
            outcome = bidding::place_bid(state, &username, contract)?;
            Ok(Vec::new())
        })?;

        match outcome {
            BidOutcome::Continue => {}
            BidOutcome::AllPass => info!(
                game_id,
                round_no = result.final_game.round_no,
                all_pass_streak = result.final_game.all_pass_streak,
                "All players passed, redealt"
            ),
            BidOutcome::Won { declarer, contract } => info!(
                game_id,
                declarer = %declarer,
                %contract,
                "Auction won"
            ),
        }
        Ok(result)
    }

    /// Declarer picks up the widow and discards exactly two cards.
    pub fn exchange_widow(
        &self,
        game_id: &str,
        username: &str,
        discarded: &[Card],
    ) -> Result<GameFlowMutationResult, DomainError> {
        let username = Username::parse(username)?;
        let result = self.run_mutation(game_id, "exchange_widow", |state| {
            widow::exchange_widow(state, &username, discarded)?;
            Ok(Vec::new())
        })?;

        info!(game_id, username = %username, version = result.final_version(), "Widow exchanged");
        Ok(result)
    }

    pub fn play_card(
        &self,
        game_id: &str,
        username: &str,
        card: Card,
    ) -> Result<GameFlowMutationResult, DomainError> {
        let username = Username::parse(username)?;
        debug!(game_id, username = %username, %card, "Playing card");

        let result = self.run_mutation(game_id, "play_card", |state| {
            let played = tricks::play_card(state, &username, card)?;
            let mut events = Vec::new();
            if let Some(winner) = played.trick_winner {
                events.push(GameTransition::TrickCompleted { winner });
            }
            if played.round_complete {
                events.push(GameTransition::RoundScored {
                    round_no: state.round_no,
                });
            }
            Ok(events)
        })?;

        let scored = result
            .transitions
            .iter()
            .any(|t| matches!(t, GameTransition::RoundScored { .. }));
        if let (true, Some(round)) = (scored, &result.final_game.last_round) {
            info!(
                game_id,
                round_no = round.round_no,
                declarer = %round.declarer,
                contract = %round.contract,
                declarer_tricks = round.declarer_tricks,
                made = round.made,
                "Round scored"
            );
        }
        Ok(result)
    }

    /// Record a defender's whist decision.
    pub fn declare_whist(
        &self,
        game_id: &str,
        username: &str,
        decision: WhistDecision,
    ) -> Result<GameFlowMutationResult, DomainError> {
        let username = Username::parse(username)?;
        let result = self.run_mutation(game_id, "declare_whist", |state| {
            whist::declare_whist(state, &username, decision)?;
            Ok(Vec::new())
        })?;

        info!(game_id, username = %username, ?decision, "Whist declared");
        Ok(result)
    }
}
