// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{Card, Contract, Level, Rank, Suit, Trump};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
    ]
}

/// Trump suit or no-trump.
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    prop_oneof![Just(None), suit().prop_map(Some)]
}

pub fn level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Six),
        Just(Level::Seven),
        Just(Level::Eight),
        Just(Level::Nine),
        Just(Level::Ten),
    ]
}

/// Any biddable contract (never PASS).
pub fn contract() -> impl Strategy<Value = Contract> {
    prop_oneof![
        9 => (level(), prop::sample::select(Trump::ALL.to_vec()))
            .prop_map(|(level, trump)| Contract::game(level, trump)),
        1 => Just(Contract::Miser),
    ]
}

/// `count` distinct cards from the 32-card deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all: Vec<Card> = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card { suit, rank }))
            .collect();
        for i in (1..all.len()).rev() {
            let j = rng.random_range(0..=i);
            all.swap(i, j);
        }
        all.truncate(count);
        all
    })
}

/// Three distinct cards for one complete trick.
pub fn trick_cards() -> impl Strategy<Value = [Card; 3]> {
    unique_cards(3).prop_map(|v| [v[0], v[1], v[2]])
}

/// Case count from `PROPTEST_CASES`, low by default for fast CI.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
