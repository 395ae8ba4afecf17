//! Variant configuration.
//!
//! `GameRules` is the single source of truth for everything that differs
//! between Preferans variants. Engine code reads these fields and never
//! hard-codes variant behaviour.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const PLAYERS: usize = 3;
pub const TRICKS_PER_ROUND: u8 = 10;
pub const DEFAULT_VARIANT: &str = "sochinka";

/// Minimum game level required to exit a run of all-pass deals.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MizerExitType {
    /// Always 6.
    #[serde(rename = "FLAT_6")]
    Flat6,
    /// 6, then 7, then 8 for every further all-pass deal.
    #[serde(rename = "ESCALATING_678")]
    Escalating678,
    /// 6, then 7 for every further all-pass deal.
    #[serde(rename = "ESCALATING_677")]
    Escalating677,
}

/// Whether defenders may pass on a level-10 contract.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenGameMode {
    /// Ten-trick games are checked: a whist decision is mandatory.
    Checked,
    /// Defenders may pass freely.
    Whisted,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WhistType {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolRules {
    pub enabled: bool,
    /// Bullet each player must reach to close the pool.
    pub size: i32,
}

impl Default for PoolRules {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub trick_points_multiplier: i32,
    /// Mountain per required trick when the contract fails.
    pub undertrick_penalty: i32,
    pub exact_contract_bonus: i32,
    pub miser_points: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            trick_points_multiplier: 1,
            undertrick_penalty: 1,
            exact_contract_bonus: 0,
            miser_points: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub name: String,
    pub description: String,
    pub mizer_exit: MizerExitType,
    pub mizer_exit_on_failed_contract: bool,
    pub allow_miser_exit: bool,
    pub mandatory_six_spades_whist: bool,
    pub allow_half_whist: bool,
    pub allow_half_whist_after_pass: bool,
    pub minimum_opening_bid: u8,
    pub ten_game_mode: TenGameMode,
    pub whist_type: WhistType,
    pub pool: PoolRules,
    pub scoring: ScoringRules,
    pub follow_suit: bool,
    /// Seconds per card; enforced by the transport, not the engine.
    pub move_time_limit_secs: Option<u32>,
    /// Seconds per bid; enforced by the transport, not the engine.
    pub bidding_time_limit_secs: Option<u32>,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules::sochinka()
    }
}

impl GameRules {
    pub fn sochinka() -> Self {
        Self {
            name: "Sochinka".to_string(),
            description: "Classic Sochi pool with escalating 6-7-7 all-pass exit".to_string(),
            mizer_exit: MizerExitType::Escalating677,
            mizer_exit_on_failed_contract: false,
            allow_miser_exit: true,
            mandatory_six_spades_whist: true,
            allow_half_whist: true,
            allow_half_whist_after_pass: true,
            minimum_opening_bid: 6,
            ten_game_mode: TenGameMode::Checked,
            whist_type: WhistType::Closed,
            pool: PoolRules::default(),
            scoring: ScoringRules::default(),
            follow_suit: true,
            move_time_limit_secs: None,
            bidding_time_limit_secs: None,
        }
    }

    pub fn leningrad() -> Self {
        Self {
            name: "Leningradka".to_string(),
            description: "Leningrad pool: doubled trick points, 6-7-8 all-pass exit".to_string(),
            mizer_exit: MizerExitType::Escalating678,
            mizer_exit_on_failed_contract: true,
            allow_half_whist_after_pass: false,
            scoring: ScoringRules {
                trick_points_multiplier: 2,
                undertrick_penalty: 2,
                ..ScoringRules::default()
            },
            ..Self::sochinka()
        }
    }

    pub fn rostov() -> Self {
        Self {
            name: "Rostov".to_string(),
            description: "Rostov pool: open whist, flat 6 all-pass exit, no half whist".to_string(),
            mizer_exit: MizerExitType::Flat6,
            allow_miser_exit: false,
            allow_half_whist: false,
            allow_half_whist_after_pass: false,
            ten_game_mode: TenGameMode::Whisted,
            whist_type: WhistType::Open,
            ..Self::sochinka()
        }
    }

    /// Built-in variants keyed by id.
    pub fn builtin() -> Vec<(&'static str, GameRules)> {
        vec![
            ("sochinka", Self::sochinka()),
            ("leningrad", Self::leningrad()),
            ("rostov", Self::rostov()),
        ]
    }

    /// Reject configurations the engine cannot play.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(6..=10).contains(&self.minimum_opening_bid) {
            return Err(DomainError::validation(
                ValidationKind::InvalidRules,
                format!(
                    "minimum_opening_bid must be within 6..=10, got {}",
                    self.minimum_opening_bid
                ),
            ));
        }
        if self.pool.enabled && self.pool.size <= 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidRules,
                "pool.size must be positive when the pool is enabled",
            ));
        }
        if self.scoring.trick_points_multiplier < 0
            || self.scoring.undertrick_penalty < 0
            || self.scoring.miser_points < 0
        {
            return Err(DomainError::validation(
                ValidationKind::InvalidRules,
                "scoring values must not be negative",
            ));
        }
        Ok(())
    }
}

/// Multi-line human-readable summary of a rules configuration.
pub fn describe_rules(rules: &GameRules) -> String {
    let exit = match rules.mizer_exit {
        MizerExitType::Flat6 => "6",
        MizerExitType::Escalating678 => "6-7-8",
        MizerExitType::Escalating677 => "6-7-7",
    };
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let mut lines = vec![
        format!("{}: {}", rules.name, rules.description),
        format!(
            "All-pass exit: {exit} (miser exit: {})",
            yes_no(rules.allow_miser_exit)
        ),
        format!("Minimum opening bid: {}", rules.minimum_opening_bid),
        format!(
            "Whist: {:?}, mandatory on 6 spades: {}, half whist: {}",
            rules.whist_type,
            yes_no(rules.mandatory_six_spades_whist),
            yes_no(rules.allow_half_whist)
        ),
        format!("Ten-trick games: {:?}", rules.ten_game_mode),
        format!(
            "Scoring: x{} per trick, failed contract: required x{} to mountain, +{} exact bonus, miser {}",
            rules.scoring.trick_points_multiplier,
            rules.scoring.undertrick_penalty,
            rules.scoring.exact_contract_bonus,
            rules.scoring.miser_points
        ),
    ];
    if rules.pool.enabled {
        lines.push(format!("Pool size: {}", rules.pool.size));
    } else {
        lines.push("Pool: disabled".to_string());
    }
    lines.join("\n")
}
