//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `a` beats `b` in a trick led with `lead`. `trump` is `None` for
/// no-trump and miser, which rank by lead suit only.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<Suit>) -> bool {
    if let Some(trump_suit) = trump {
        let a_trump = a.suit == trump_suit;
        let b_trump = b.suit == trump_suit;
        if a_trump != b_trump {
            return a_trump;
        }
        if a_trump && b_trump {
            return a.rank > b.rank;
        }
    }

    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows != b_follows {
        return a_follows;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    // Neither trump nor lead
    false
}
