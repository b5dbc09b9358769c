//! Error types for card conversions.
//!
//! Building and transforming decks never fails; only conversions from
//! numbers and text do.

use thiserror::Error;

/// A numeric rank outside `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid rank value {0}, expected 1 through 13")]
pub struct InvalidRank(pub u8);

/// Unknown suit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown suit name")]
pub struct ParseSuitError;

/// Unknown rank name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown rank name")]
pub struct ParseRankError;

/// Errors that can occur while parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text has no `" of "` between rank and suit.
    #[error("expected \"<Rank> of <Suit>s\"")]
    MissingSeparator,
    /// The suit is not in plural form.
    #[error("suit name must end with 's'")]
    MissingPluralSuffix,
    /// The rank part is not a rank name.
    #[error(transparent)]
    Rank(#[from] ParseRankError),
    /// The suit part is not a standard suit name.
    #[error(transparent)]
    Suit(#[from] ParseSuitError),
}
