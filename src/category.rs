//! Hand categories and exclusive classification.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;
use crate::hand::{
    check_size, flush, four_of_a_kind, full_house, one_pair, straight, straight_flush,
    three_of_a_kind, two_pair,
};

/// A poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// No other category applies.
    HighCard,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight that is also a flush.
    StraightFlush,
}

impl HandCategory {
    /// All categories, weakest first.
    pub const ALL: [Self; 9] = [
        Self::HighCard,
        Self::OnePair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
    ];

    /// Returns whether the hand contains this category.
    ///
    /// [`HandCategory::HighCard`] matches every hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::TooManyCards`] for hands of six or more cards.
    pub fn matches(self, cards: &[Card]) -> Result<bool, HandError> {
        match self {
            Self::HighCard => check_size(cards).map(|()| true),
            Self::OnePair => one_pair(cards),
            Self::TwoPair => two_pair(cards),
            Self::ThreeOfAKind => three_of_a_kind(cards),
            Self::Straight => straight(cards),
            Self::Flush => flush(cards),
            Self::FullHouse => full_house(cards),
            Self::FourOfAKind => four_of_a_kind(cards),
            Self::StraightFlush => straight_flush(cards),
        }
    }

    /// Returns the display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "high card",
            Self::OnePair => "one pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the strongest category the hand contains.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
///
/// # Example
///
/// ```
/// use pokerhands::{Card, HandCategory, Suit, classify};
///
/// let hand = [
///     Card::new(10, Suit::Hearts)?,
///     Card::new(1, Suit::Spades)?,
///     Card::new(10, Suit::Spades)?,
///     Card::new(10, Suit::Clubs)?,
///     Card::new(10, Suit::Diamonds)?,
/// ];
/// assert_eq!(classify(&hand), Ok(HandCategory::FourOfAKind));
/// # Ok::<(), pokerhands::CardError>(())
/// ```
pub fn classify(cards: &[Card]) -> Result<HandCategory, HandError> {
    for category in HandCategory::ALL.into_iter().rev() {
        if category.matches(cards)? {
            log::trace!("classified {} cards as {category}", cards.len());
            return Ok(category);
        }
    }
    Ok(HandCategory::HighCard)
}

/// Returns every category the hand contains, weakest first.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for hands of six or more cards.
pub fn categories(cards: &[Card]) -> Result<Vec<HandCategory>, HandError> {
    check_size(cards)?;
    let mut matched = Vec::new();
    for category in HandCategory::ALL {
        if category.matches(cards)? {
            matched.push(category);
        }
    }
    Ok(matched)
}
