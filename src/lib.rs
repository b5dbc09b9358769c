//! A playing-card deck builder with optional `no_std` support.
//!
//! A deck starts as the standard 52 cards and is shaped by an ordered list
//! of [`Transform`]s: sorting, shuffling, filtering, adding jokers, or
//! repeating the deck.
//!
//! # Example
//!
//! ```
//! use deckrs::{Rank, deck, transform};
//!
//! let cards = deck::new([transform::filter(|card| {
//!     matches!(card.rank(), Some(Rank::Two | Rank::Three))
//! })]);
//! assert_eq!(cards.len(), 44);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::DeckBuilder;
pub use error::{InvalidRank, ParseCardError, ParseRankError, ParseSuitError};
pub use options::{DeckOptions, ShuffleMode};
pub use transform::{DefaultSort, Transform};
