//! Error types for card construction and hand classification.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside `1..=13`.
    #[error("invalid card rank {0}, expected 1 to 13")]
    InvalidRank(u8),
    /// Suit symbol is not one of the four recognised suits.
    #[error("unrecognised suit symbol")]
    InvalidSuit,
}

/// Errors that can occur during hand classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand holds more cards than a classifier accepts.
    #[error("too many cards in hand: {len}, at most 5 allowed")]
    TooManyCards {
        /// Number of cards supplied.
        len: usize,
    },
}
