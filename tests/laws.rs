//! Seeded randomised checks of the inclusion laws between categories.

use pokerhands::{
    Card, HandCategory, Suit, categories, classify, flush, four_of_a_kind, full_house, one_pair,
    straight, straight_flush, three_of_a_kind, two_pair,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ROUNDS: usize = 2_000;

/// Draws a five-card hand. Narrow rank ranges make repeated ranks common.
fn random_hand(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let top = if rng.random_bool(0.5) { 3 } else { 13 };
    (0..5)
        .map(|_| {
            let rank = rng.random_range(1..=top);
            let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
            Card::new(rank, suit).expect("valid card")
        })
        .collect()
}

fn straight_flushes() -> impl Iterator<Item = Vec<Card>> {
    Suit::ALL.into_iter().flat_map(|suit| {
        (1..=9).map(move |base| {
            (base..base + 5)
                .map(|rank| Card::new(rank, suit).expect("valid card"))
                .collect()
        })
    })
}

#[test]
fn stronger_categories_imply_weaker_ones() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..ROUNDS {
        let cards = random_hand(&mut rng);
        if four_of_a_kind(&cards).expect("five cards") {
            assert!(three_of_a_kind(&cards).expect("five cards"), "{cards:?}");
            assert!(two_pair(&cards).expect("five cards"), "{cards:?}");
            assert!(one_pair(&cards).expect("five cards"), "{cards:?}");
            assert!(!full_house(&cards).expect("five cards"), "{cards:?}");
        }
        if full_house(&cards).expect("five cards") {
            assert!(three_of_a_kind(&cards).expect("five cards"), "{cards:?}");
            assert!(two_pair(&cards).expect("five cards"), "{cards:?}");
            assert!(one_pair(&cards).expect("five cards"), "{cards:?}");
        }
        if two_pair(&cards).expect("five cards") || three_of_a_kind(&cards).expect("five cards") {
            assert!(one_pair(&cards).expect("five cards"), "{cards:?}");
        }
        if straight(&cards).expect("five cards") {
            assert!(!one_pair(&cards).expect("five cards"), "{cards:?}");
        }
    }
}

#[test]
fn straight_flush_implies_straight_and_flush() {
    for cards in straight_flushes() {
        assert_eq!(straight_flush(&cards), Ok(true), "{cards:?}");
        assert_eq!(straight(&cards), Ok(true), "{cards:?}");
        assert_eq!(flush(&cards), Ok(true), "{cards:?}");
        assert_eq!(classify(&cards), Ok(HandCategory::StraightFlush));
    }
}

#[test]
fn classify_is_the_strongest_match() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let cards = random_hand(&mut rng);
        let best = classify(&cards).expect("five cards");
        let all = categories(&cards).expect("five cards");
        assert_eq!(all.last(), Some(&best), "{cards:?}");
        assert_eq!(all.first(), Some(&HandCategory::HighCard));
        assert_eq!(classify(&cards), Ok(best));
    }
}
