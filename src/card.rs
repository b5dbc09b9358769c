//! Card types and their text forms.

use core::fmt;
use core::str::FromStr;

use crate::error::{InvalidRank, ParseCardError, ParseRankError, ParseSuitError};

/// Card suit.
///
/// The four standard suits are declared in deck order. [`Suit::Joker`] is
/// a special suit used only by jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Joker (not a standard suit).
    Joker,
}

impl Suit {
    /// The four standard suits in deck order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Position of the suit in declaration order (`Spade` = 0, `Joker` = 4).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Singular name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spade" => Ok(Self::Spade),
            "Diamond" => Ok(Self::Diamond),
            "Club" => Ok(Self::Club),
            "Heart" => Ok(Self::Heart),
            "Joker" => Ok(Self::Joker),
            _ => Err(ParseSuitError),
        }
    }
}

/// Card rank, numbered from `Ace` = 1 to `King` = 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// Every rank in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Lowest rank.
    pub const MIN: Self = Self::Ace;

    /// Highest rank.
    pub const MAX: Self = Self::King;

    /// Numeric value of the rank (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.value()..=Self::MAX.value()).contains(&value) {
            Ok(Self::ALL[(value - Self::MIN.value()) as usize])
        } else {
            Err(InvalidRank(value))
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.name() == s)
            .ok_or(ParseRankError)
    }
}

/// A playing card.
///
/// Standard cards pair one of [`Suit::STANDARD`] with a [`Rank`]. Jokers use
/// [`Suit::Joker`] and carry a numeric tag in place of a rank, so that
/// several jokers in one deck can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    /// Rank value for standard cards, tag for jokers.
    rank: u8,
}

impl Card {
    /// Creates a standard card.
    ///
    /// Passing [`Suit::Joker`] yields a joker tagged with the rank's value.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank: rank.value(),
        }
    }

    /// Creates a joker with the given tag.
    #[must_use]
    pub const fn joker(tag: u8) -> Self {
        Self {
            suit: Suit::Joker,
            rank: tag,
        }
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The rank of the card, or `None` for a joker.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        if self.is_joker() {
            return None;
        }
        Some(Rank::ALL[self.rank as usize - 1])
    }

    /// The tag of a joker, or `None` for a standard card.
    #[must_use]
    pub const fn joker_tag(self) -> Option<u8> {
        if self.is_joker() {
            Some(self.rank)
        } else {
            None
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Sort key ordering suits first, then ranks.
    ///
    /// Computed as `suit_index * 13 + rank_value`; jokers use their tag as
    /// the rank value.
    #[must_use]
    pub const fn abs_rank(self) -> u16 {
        self.suit.index() as u16 * Rank::MAX.value() as u16 + self.rank as u16
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(rank) => write!(f, "{rank} of {}s", self.suit),
            None => f.write_str(self.suit.name()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the form produced by `Display`.
    ///
    /// `"Joker"` parses to `Card::joker(0)`; the original tag is not part of
    /// the text form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Suit::Joker.name() {
            return Ok(Self::joker(0));
        }

        let (rank, suit) = s
            .split_once(" of ")
            .ok_or(ParseCardError::MissingSeparator)?;
        let suit = suit
            .strip_suffix('s')
            .ok_or(ParseCardError::MissingPluralSuffix)?;

        let rank: Rank = rank.parse()?;
        let suit: Suit = suit.parse()?;
        if suit == Suit::Joker {
            return Err(ParseCardError::Suit(ParseSuitError));
        }

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = Suit::STANDARD.len() * Rank::ALL.len();
