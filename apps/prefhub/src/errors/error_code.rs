//! Error codes exposed to transports.
//!
//! Every `DomainError` maps to exactly one code. Add new codes here; never
//! pass ad-hoc strings as error codes. All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

use super::domain::{ConflictKind, DomainError, MoveKind, NotFoundKind, ValidationKind};

/// Centralized error codes for the PrefHub engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not seated at this game
    PlayerNotFound,
    /// Unknown rules variant
    RulesNotFound,
    /// Unknown or expired session credential
    SessionNotFound,

    // Flow
    /// Action not valid in the current phase
    PhaseMismatch,
    /// Actor is not the current player
    OutOfTurn,
    /// Game already seats three players
    GameFull,
    /// Deck exhausted while dealing
    DealingFailed,

    // Moves
    /// Card not in hand
    CardNotInHand,
    /// Must follow suit (or trump when void)
    MustFollowSuit,
    /// Widow discard must be exactly two cards
    InvalidDiscard,
    /// Bid below the minimum opening level
    BidBelowMinimum,
    /// Bid below the level required to exit an all-pass streak
    BidBelowExitLevel,
    /// Bid not higher than the current maximum
    BidNotHigher,
    /// Whist decision refused by the active rules
    WhistNotAllowed,

    // Conflicts
    /// Game id already registered
    GameExists,
    /// Username already seated
    DuplicatePlayer,
    /// Defender already declared a whist decision
    WhistAlreadyDeclared,

    // Input
    /// Card token could not be parsed
    ParseCard,
    /// Contract token could not be parsed
    ParseContract,
    /// Invalid trump conversion
    InvalidTrumpConversion,
    /// Rules configuration rejected
    InvalidRules,
    /// General validation error
    ValidationError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RulesNotFound => "RULES_NOT_FOUND",
            Self::SessionNotFound => "SESSION_NOT_FOUND",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::GameFull => "GAME_FULL",
            Self::DealingFailed => "DEALING_FAILED",

            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::InvalidDiscard => "INVALID_DISCARD",
            Self::BidBelowMinimum => "BID_BELOW_MINIMUM",
            Self::BidBelowExitLevel => "BID_BELOW_EXIT_LEVEL",
            Self::BidNotHigher => "BID_NOT_HIGHER",
            Self::WhistNotAllowed => "WHIST_NOT_ALLOWED",

            Self::GameExists => "GAME_EXISTS",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::WhistAlreadyDeclared => "WHIST_ALREADY_DECLARED",

            Self::ParseCard => "PARSE_CARD",
            Self::ParseContract => "PARSE_CONTRACT",
            Self::InvalidTrumpConversion => "INVALID_TRUMP_CONVERSION",
            Self::InvalidRules => "INVALID_RULES",
            Self::ValidationError => "VALIDATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => Self::GameNotFound,
                NotFoundKind::Player => Self::PlayerNotFound,
                NotFoundKind::Rules => Self::RulesNotFound,
                NotFoundKind::Session => Self::SessionNotFound,
            },
            DomainError::IllegalState(_) => Self::PhaseMismatch,
            DomainError::IllegalTurn(_) => Self::OutOfTurn,
            DomainError::IllegalMove(kind, _) => match kind {
                MoveKind::CardNotInHand => Self::CardNotInHand,
                MoveKind::MustFollowSuit => Self::MustFollowSuit,
                MoveKind::DiscardCount | MoveKind::DuplicateDiscard => Self::InvalidDiscard,
                MoveKind::BidBelowMinimum => Self::BidBelowMinimum,
                MoveKind::BidBelowExitLevel => Self::BidBelowExitLevel,
                MoveKind::BidNotHigher => Self::BidNotHigher,
                MoveKind::WhistNotAllowed => Self::WhistNotAllowed,
            },
            DomainError::Capacity(_) => Self::GameFull,
            DomainError::Dealing(_) => Self::DealingFailed,
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::GameExists => Self::GameExists,
                ConflictKind::DuplicatePlayer => Self::DuplicatePlayer,
                ConflictKind::WhistAlreadyDeclared => Self::WhistAlreadyDeclared,
            },
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::ParseCard => Self::ParseCard,
                ValidationKind::ParseContract => Self::ParseContract,
                ValidationKind::InvalidTrumpConversion => Self::InvalidTrumpConversion,
                ValidationKind::InvalidRules => Self::InvalidRules,
                ValidationKind::Other(_) => Self::ValidationError,
            },
        }
    }
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from(self)
    }
}
