//! Hand category predicates.
//!
//! Each predicate takes a hand of at most [`MAX_HAND_SIZE`] cards and answers
//! whether the hand contains the category. The predicates are inclusive: a
//! four of a kind is also a pair, two pair and three of a kind. Use
//! [`classify`](crate::classify) for the single strongest category.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::combination::combinations;
use crate::error::HandError;

/// Largest hand accepted by the predicates.
pub const MAX_HAND_SIZE: usize = 5;

/// Rejects hands larger than [`MAX_HAND_SIZE`].
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] if `cards` holds more than five cards.
pub fn check_size(cards: &[Card]) -> Result<(), HandError> {
    if cards.len() > MAX_HAND_SIZE {
        log::debug!("rejected hand of {} cards", cards.len());
        return Err(HandError::TooManyCards { len: cards.len() });
    }
    Ok(())
}

/// Returns whether some `k` cards of the hand share one rank.
fn has_same_rank(cards: &[Card], k: usize) -> bool {
    combinations(cards, k).any(|group| group.all_equal_by(Card::rank))
}

/// Returns whether any two cards share a rank.
///
/// Also true for two pair, three of a kind, full house and four of a kind.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
///
/// # Example
///
/// ```
/// use pokerhands::{Card, Suit, one_pair};
///
/// let hand = [
///     Card::new(5, Suit::Hearts)?,
///     Card::new(8, Suit::Spades)?,
///     Card::new(5, Suit::Spades)?,
///     Card::new(11, Suit::Clubs)?,
///     Card::new(1, Suit::Diamonds)?,
/// ];
/// assert_eq!(one_pair(&hand), Ok(true));
/// # Ok::<(), pokerhands::CardError>(())
/// ```
pub fn one_pair(cards: &[Card]) -> Result<bool, HandError> {
    check_size(cards)?;
    Ok(has_same_rank(cards, 2))
}

/// Returns whether the hand holds two pairs.
///
/// A pair is set aside and the remaining cards must hold another pair. Also
/// true for full house and four of a kind.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
pub fn two_pair(cards: &[Card]) -> Result<bool, HandError> {
    check_size(cards)?;
    for pair in combinations(cards, 2) {
        if pair.all_equal_by(Card::rank) && one_pair(&pair.remainder())? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns whether any three cards share a rank.
///
/// Also true for full house and four of a kind.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
pub fn three_of_a_kind(cards: &[Card]) -> Result<bool, HandError> {
    check_size(cards)?;
    Ok(has_same_rank(cards, 3))
}

/// Returns whether the hand is five consecutive ranks.
///
/// The ace is rank 1 only, so A-2-3-4-5 is a straight and 10-J-Q-K-A is not.
/// Hands with fewer than five cards are never straights.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
pub fn straight(cards: &[Card]) -> Result<bool, HandError> {
    check_size(cards)?;
    if cards.len() < MAX_HAND_SIZE {
        return Ok(false);
    }
    let mut ranks: Vec<u8> = cards.iter().map(Card::rank).collect();
    ranks.sort_unstable();
    let base = ranks[0];
    Ok(ranks
        .iter()
        .zip(base..)
        .all(|(&rank, expected)| rank == expected))
}

/// Returns whether all five cards share the first card's suit.
///
/// Hands with fewer than five cards are never flushes.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
pub fn flush(cards: &[Card]) -> Result<bool, HandError> {
    check_size(cards)?;
    let Some((first, rest)) = cards.split_first() else {
        return Ok(false);
    };
    Ok(cards.len() == MAX_HAND_SIZE && rest.iter().all(|card| card.suit() == first.suit()))
}

/// Returns whether the hand is three of a kind plus a pair.
///
/// Three cards of one rank are set aside and the two remaining cards must
/// share a rank. A four of a kind is not a full house: the fourth card and
/// the kicker never pair.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
pub fn full_house(cards: &[Card]) -> Result<bool, HandError> {
    check_size(cards)?;
    Ok(combinations(cards, 3)
        .filter(|triple| triple.all_equal_by(Card::rank))
        .any(|triple| match triple.remainder().as_slice() {
            [a, b] => a.rank() == b.rank(),
            _ => false,
        }))
}

/// Returns whether any four cards share a rank.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
pub fn four_of_a_kind(cards: &[Card]) -> Result<bool, HandError> {
    check_size(cards)?;
    Ok(has_same_rank(cards, 4))
}

/// Returns whether the hand is both a straight and a flush.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
pub fn straight_flush(cards: &[Card]) -> Result<bool, HandError> {
    Ok(straight(cards)? && flush(cards)?)
}
