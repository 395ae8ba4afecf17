use serde::Serialize;

use crate::domain::state::{GameState, Phase, Username};

/// The slice of state transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub version: u64,
    pub phase: Phase,
    pub turn: Option<Username>,
    pub round_no: u32,
    pub deal_no: u32,
}

impl GameLifecycleView {
    pub fn of(state: &GameState) -> Self {
        Self {
            version: state.version,
            phase: state.phase,
            turn: state.current_player().map(|p| p.username.clone()),
            round_no: state.round_no,
            deal_no: state.deal_no,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { username: Username },

    /// Edge-triggered: phase changed.
    PhaseChanged { from: Phase, to: Phase },

    /// Edge-triggered: round number advanced.
    RoundStarted { round_no: u32 },

    /// Edge-triggered: new cards were dealt without a new round (all pass).
    Redealt { deal_no: u32 },

    /// Explicit: user took a seat.
    PlayerJoined { username: Username },

    /// Explicit: a trick was completed.
    TrickCompleted { winner: Username },

    /// Explicit: the round was scored.
    RoundScored { round_no: u32 },
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Phase change
    if before.phase != after.phase {
        transitions.push(GameTransition::PhaseChanged {
            from: before.phase,
            to: after.phase,
        });
    }

    // 2. New round vs. same-round redeal
    if after.round_no != before.round_no {
        transitions.push(GameTransition::RoundStarted {
            round_no: after.round_no,
        });
    } else if before.deal_no > 0 && after.deal_no != before.deal_no {
        transitions.push(GameTransition::Redealt {
            deal_no: after.deal_no,
        });
    }

    // 3. Turn change
    if let Some(username) = &after.turn {
        if before.turn.as_ref() != Some(username) {
            transitions.push(GameTransition::TurnBecame {
                username: username.clone(),
            });
        }
    }

    transitions
}
