//! Deck construction and seeded dealing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

pub const DECK_SIZE: usize = 32;
pub const HAND_SIZE: usize = 10;
pub const WIDOW_SIZE: usize = 2;

/// The 32-card Preferans deck. Cards are dealt from the top without replacement.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full deck in suit-priority then rank order.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        Self { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove `count` cards from the top of the deck.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DomainError> {
        if count > self.cards.len() {
            return Err(DomainError::dealing(format!(
                "Cannot deal {count} cards, only {} remain",
                self.cards.len()
            )));
        }
        Ok(self.cards.drain(..count).collect())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Hands for the three seats plus the two-card widow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Vec<Card>; 3],
    pub widow: Vec<Card>,
}

/// Shuffle a fresh deck with a ChaCha RNG seeded from `seed` and deal it out.
pub fn deal_round(seed: u64) -> Result<Deal, DomainError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; 3] = Default::default();
    for hand in hands.iter_mut() {
        let mut cards = deck.deal(HAND_SIZE)?;
        cards.sort();
        *hand = cards;
    }
    let widow = deck.deal(WIDOW_SIZE)?;
    Ok(Deal { hands, widow })
}

/// Derive the seed for one deal of a game.
///
/// Every deal (including all-pass redeals) gets its own counter, so the same
/// game seed and deal number always reproduce the same cards.
pub fn derive_dealing_seed(game_seed: u64, deal_no: u32) -> u64 {
    game_seed
        .wrapping_add((deal_no as u64).wrapping_mul(1_000_003))
        .wrapping_add(2)
}
