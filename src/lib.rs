//! Poker hand category predicates with optional `no_std` support.
//!
//! The crate provides a validated [`Card`] type and one predicate per hand
//! category ([`one_pair`], [`two_pair`], [`three_of_a_kind`], [`straight`],
//! [`flush`], [`full_house`], [`four_of_a_kind`], [`straight_flush`]). The
//! predicates are inclusive; [`classify`] picks the strongest category.
//!
//! # Example
//!
//! ```
//! use pokerhands::{Card, HandCategory, Suit, classify, full_house, two_pair};
//!
//! let hand = [
//!     Card::new(3, Suit::Hearts)?,
//!     Card::new(5, Suit::Hearts)?,
//!     Card::new(3, Suit::Spades)?,
//!     Card::new(5, Suit::Clubs)?,
//!     Card::new(3, Suit::Diamonds)?,
//! ];
//! assert_eq!(full_house(&hand), Ok(true));
//! assert_eq!(two_pair(&hand), Ok(true));
//! assert_eq!(classify(&hand), Ok(HandCategory::FullHouse));
//! # Ok::<(), pokerhands::CardError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod combination;
pub mod error;
pub mod hand;

// Re-export main types
pub use card::{ACE, Card, JACK, KING, MAX_RANK, MIN_RANK, QUEEN, Suit};
pub use category::{HandCategory, categories, classify};
pub use combination::{Combination, Combinations, combinations};
pub use error::{CardError, HandError};
pub use hand::{
    MAX_HAND_SIZE, check_size, flush, four_of_a_kind, full_house, one_pair, straight,
    straight_flush, three_of_a_kind, two_pair,
};
