//! Domain-level error type used across the engine, validator and adapters.
//!
//! This error type is transport-agnostic. Every rejection the engine issues is
//! one of these variants, and a rejected action never leaves a partially
//! mutated `GameState` behind.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Missing entities in domain terms
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Rules,
    Session,
}

/// Semantic conflicts with existing state
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    GameExists,
    DuplicatePlayer,
    WhistAlreadyDeclared,
}

/// Why a submitted move was refused
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveKind {
    CardNotInHand,
    MustFollowSuit,
    DiscardCount,
    DuplicateDiscard,
    BidBelowMinimum,
    BidBelowExitLevel,
    BidNotHigher,
    WhistNotAllowed,
}

/// Input parsing and configuration validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    ParseContract,
    InvalidTrumpConversion,
    InvalidRules,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Unknown game, player, rules variant or session
    NotFound(NotFoundKind, String),
    /// Action is not valid in the current phase
    IllegalState(String),
    /// Actor is not the player expected to act
    IllegalTurn(String),
    /// Move breaks a game rule
    IllegalMove(MoveKind, String),
    /// Joining a game that already seats three players
    Capacity(String),
    /// Deck exhausted; unreachable with a fixed 32-card deck
    Dealing(String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Malformed input
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::IllegalState(d) => write!(f, "illegal state: {d}"),
            DomainError::IllegalTurn(d) => write!(f, "illegal turn: {d}"),
            DomainError::IllegalMove(kind, d) => write!(f, "illegal move {kind:?}: {d}"),
            DomainError::Capacity(d) => write!(f, "capacity: {d}"),
            DomainError::Dealing(d) => write!(f, "dealing: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn illegal_state(detail: impl Into<String>) -> Self {
        Self::IllegalState(detail.into())
    }
    pub fn illegal_turn(detail: impl Into<String>) -> Self {
        Self::IllegalTurn(detail.into())
    }
    pub fn illegal_move(kind: MoveKind, detail: impl Into<String>) -> Self {
        Self::IllegalMove(kind, detail.into())
    }
    pub fn capacity(detail: impl Into<String>) -> Self {
        Self::Capacity(detail.into())
    }
    pub fn dealing(detail: impl Into<String>) -> Self {
        Self::Dealing(detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
}
