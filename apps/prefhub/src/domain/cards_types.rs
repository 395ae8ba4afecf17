//! Core card-related types: Card, Rank, Suit, Trump

use std::cmp::Ordering;

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Suit {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
}

impl Suit {
    /// Every suit, lowest priority first.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    /// Auction tie-break priority: Spades < Clubs < Diamonds < Hearts.
    pub const fn priority(self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Clubs => 1,
            Suit::Diamonds => 2,
            Suit::Hearts => 3,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }
}

/// Trump choice of a game contract. `NoTrump` ranks above every suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
    NoTrump,
}

impl Trump {
    pub const ALL: [Trump; 5] = [
        Trump::Spades,
        Trump::Clubs,
        Trump::Diamonds,
        Trump::Hearts,
        Trump::NoTrump,
    ];

    pub const fn priority(self) -> u8 {
        match self {
            Trump::Spades => 0,
            Trump::Clubs => 1,
            Trump::Diamonds => 2,
            Trump::Hearts => 3,
            Trump::NoTrump => 4,
        }
    }

    /// The trump suit, or `None` for no-trump.
    pub fn suit(self) -> Option<Suit> {
        Suit::try_from(self).ok()
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Spades => Trump::Spades,
            Suit::Clubs => Trump::Clubs,
            Suit::Diamonds => Trump::Diamonds,
            Suit::Hearts => Trump::Hearts,
        }
    }
}

impl TryFrom<Trump> for Suit {
    type Error = DomainError;

    fn try_from(trump: Trump) -> Result<Self, Self::Error> {
        match trump {
            Trump::Spades => Ok(Suit::Spades),
            Trump::Clubs => Ok(Suit::Clubs),
            Trump::Diamonds => Ok(Suit::Diamonds),
            Trump::Hearts => Ok(Suit::Hearts),
            Trump::NoTrump => Err(DomainError::validation(
                ValidationKind::InvalidTrumpConversion,
                "Cannot convert NoTrump to Suit",
            )),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rank {
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value 7..=14.
    pub const fn value(self) -> u8 {
        match self {
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

// Ord on Card is only for stable hand sorting (suit priority, then rank).
// Trick resolution goes through `card_beats`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit
            .priority()
            .cmp(&other.suit.priority())
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
