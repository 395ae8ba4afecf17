//! Auction contracts and their ordering.
//!
//! There are 27 contract values: five trick levels (6..=10) times five trump
//! choices, plus `Miser` and `Pass`. Ordering is driven by [`Contract::strength`],
//! never by declaration order. Miser sits between level 7 and level 8.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Suit, Trump};
use crate::errors::domain::{DomainError, ValidationKind};

/// Tricks a game contract commits the declarer to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Level {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Six,
        Level::Seven,
        Level::Eight,
        Level::Nine,
        Level::Ten,
    ];

    pub const fn tricks(self) -> u8 {
        match self {
            Level::Six => 6,
            Level::Seven => 7,
            Level::Eight => 8,
            Level::Nine => 9,
            Level::Ten => 10,
        }
    }

    pub fn from_tricks(tricks: u8) -> Option<Level> {
        Level::ALL.into_iter().find(|l| l.tricks() == tricks)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Contract {
    Game { level: Level, trump: Trump },
    Miser,
    Pass,
}

const MISER_STRENGTH: u8 = 10;

impl Contract {
    pub const fn game(level: Level, trump: Trump) -> Self {
        Contract::Game { level, trump }
    }

    /// Ordering key for auction comparison. `Pass` has none.
    ///
    /// Levels 6 and 7 occupy 0..=9, miser is 10, levels 8..=10 occupy 11..=25.
    pub fn strength(self) -> Option<u8> {
        match self {
            Contract::Pass => None,
            Contract::Miser => Some(MISER_STRENGTH),
            Contract::Game { level, trump } => {
                let step = (level.tricks() - 6) * 5 + trump.priority();
                if level.tricks() <= 7 {
                    Some(step)
                } else {
                    Some(step + 1)
                }
            }
        }
    }

    /// Strict auction ordering. Nothing beats `Pass` and `Pass` beats nothing.
    pub fn is_higher_than(self, other: Contract) -> bool {
        match (self.strength(), other.strength()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }

    /// Every contract except `Pass`, weakest first.
    pub fn all() -> Vec<Contract> {
        let mut all: Vec<Contract> = Level::ALL
            .into_iter()
            .flat_map(|level| Trump::ALL.into_iter().map(move |trump| Contract::game(level, trump)))
            .collect();
        all.push(Contract::Miser);
        all.sort_by(|a, b| a.cmp_strength(b));
        all
    }

    fn cmp_strength(&self, other: &Contract) -> Ordering {
        self.strength().cmp(&other.strength())
    }

    /// Tricks the declarer must take: the level for game contracts, 0 for miser.
    pub fn required_tricks(self) -> u8 {
        match self {
            Contract::Game { level, .. } => level.tricks(),
            Contract::Miser | Contract::Pass => 0,
        }
    }

    pub fn level(self) -> Option<Level> {
        match self {
            Contract::Game { level, .. } => Some(level),
            _ => None,
        }
    }

    pub fn trump(self) -> Option<Trump> {
        match self {
            Contract::Game { trump, .. } => Some(trump),
            _ => None,
        }
    }

    /// Trump suit used for trick resolution. Miser and no-trump have none.
    pub fn trump_suit(self) -> Option<Suit> {
        self.trump().and_then(Trump::suit)
    }

    pub fn is_miser(self) -> bool {
        matches!(self, Contract::Miser)
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Contract::Pass)
    }

    pub fn is_no_trump(self) -> bool {
        matches!(
            self,
            Contract::Game {
                trump: Trump::NoTrump,
                ..
            }
        )
    }

    /// Human-readable name with suit symbols, e.g. "6♠", "7 NT", "Miser".
    pub fn display_name(self) -> String {
        match self {
            Contract::Pass => "Pass".to_string(),
            Contract::Miser => "Miser".to_string(),
            Contract::Game { level, trump } => match trump.suit() {
                Some(suit) => format!("{}{}", level.tricks(), suit.symbol()),
                None => format!("{} NT", level.tricks()),
            },
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contract::Pass => f.write_str("PASS"),
            Contract::Miser => f.write_str("MISER"),
            Contract::Game { level, trump } => {
                let t = match trump {
                    Trump::Spades => "S",
                    Trump::Clubs => "C",
                    Trump::Diamonds => "D",
                    Trump::Hearts => "H",
                    Trump::NoTrump => "NT",
                };
                write!(f, "{}{}", level.tricks(), t)
            }
        }
    }
}

impl FromStr for Contract {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        let err = || {
            DomainError::validation(ValidationKind::ParseContract, format!("Parse contract: {s}"))
        };
        if !token.is_ascii() {
            return Err(err());
        }
        match token.as_str() {
            "PASS" => return Ok(Contract::Pass),
            "MISER" => return Ok(Contract::Miser),
            _ => {}
        }

        // "10NT" has a two-digit level
        let split = if token.starts_with("10") { 2 } else { 1 };
        if token.len() <= split {
            return Err(err());
        }
        let (level_part, trump_part) = token.split_at(split);
        let level = level_part
            .parse::<u8>()
            .ok()
            .and_then(Level::from_tricks)
            .ok_or_else(err)?;
        let trump = match trump_part {
            "S" => Trump::Spades,
            "C" => Trump::Clubs,
            "D" => Trump::Diamonds,
            "H" => Trump::Hearts,
            "NT" => Trump::NoTrump,
            _ => return Err(err()),
        };
        Ok(Contract::game(level, trump))
    }
}

impl Serialize for Contract {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Contract {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Contract>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
