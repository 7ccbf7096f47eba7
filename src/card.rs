//! Card types and suit symbols.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Lowest valid rank (the ace).
pub const MIN_RANK: u8 = 1;
/// Highest valid rank (the king).
pub const MAX_RANK: u8 = 13;

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

fn check_rank(rank: u8) -> Result<(), CardError> {
    if (MIN_RANK..=MAX_RANK).contains(&rank) {
        Ok(())
    } else {
        log::debug!("rejected card rank {rank}");
        Err(CardError::InvalidRank(rank))
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Parses a suit from its symbol.
    ///
    /// Accepts the pictorial symbols (`♠`, `♥`/`❤`, `♣`, `♦`, optionally
    /// followed by a variation selector) and the letters `s`, `h`, `c`, `d`
    /// in either case.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for any other input.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::Suit;
    ///
    /// assert_eq!(Suit::from_symbol("♠︎"), Ok(Suit::Spades));
    /// assert_eq!(Suit::from_symbol("d"), Ok(Suit::Diamonds));
    /// assert!(Suit::from_symbol("x").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        let symbol = symbol.trim_end_matches(['\u{fe0e}', '\u{fe0f}']);
        match symbol {
            "♠" | "s" | "S" => Ok(Self::Spades),
            "♥" | "❤" | "h" | "H" => Ok(Self::Hearts),
            "♣" | "c" | "C" => Ok(Self::Clubs),
            "♦" | "d" | "D" => Ok(Self::Diamonds),
            _ => {
                log::debug!("rejected suit symbol {symbol:?}");
                Err(CardError::InvalidSuit)
            }
        }
    }

    /// Returns the canonical pictorial symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

/// A playing card.
///
/// A `Card` always holds a rank in `1..=13` (1 = Ace, 11 = Jack, 12 = Queen,
/// 13 = King). Two cards are equal when both rank and suit match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCard"))]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::{Card, CardError, Suit};
    ///
    /// let card = Card::new(12, Suit::Hearts)?;
    /// assert_eq!(card.rank(), 12);
    /// assert_eq!(card.suit(), Suit::Hearts);
    /// assert_eq!(Card::new(14, Suit::Hearts), Err(CardError::InvalidRank(14)));
    /// # Ok::<(), CardError>(())
    /// ```
    pub fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        check_rank(rank)?;
        Ok(Self { rank, suit })
    }

    /// Creates a card from a rank and a suit symbol.
    ///
    /// The rank is validated before the suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`].
    pub fn parse(rank: u8, suit: &str) -> Result<Self, CardError> {
        check_rank(rank)?;
        Ok(Self {
            rank,
            suit: Suit::from_symbol(suit)?,
        })
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            ACE => f.write_str("A")?,
            JACK => f.write_str("J")?,
            QUEEN => f.write_str("Q")?,
            KING => f.write_str("K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCard {
    rank: u8,
    suit: Suit,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Self::new(raw.rank, raw.suit)
    }
}
