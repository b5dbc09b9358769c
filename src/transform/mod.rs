//! Deck transformations.
//!
//! A [`Transform`] consumes a sequence of cards and returns a new one. The
//! deck builder folds an ordered list of them over the standard deck, so
//! every kind of change (sorting, shuffling, filtering, adding cards) goes
//! through the same interface.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;

mod extend;
mod filter;
mod shuffle;
mod sort;

pub use extend::{Decks, Jokers, decks, jokers};
pub use filter::{Filter, filter};
#[cfg(feature = "std")]
pub use shuffle::shuffle;
pub use shuffle::{Shuffle, shuffle_seeded, shuffle_with};
pub use sort::{Comparator, DefaultSort, SortBy, SortWith, default_order, sort_by, sort_with};

/// Transforms a sequence of cards into a sequence of cards.
pub trait Transform {
    /// Applies the transformation, returning the resulting sequence.
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<T: Transform + ?Sized> Transform for &mut T {
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        (**self).apply(cards)
    }
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        (**self).apply(cards)
    }
}

/// A transformation backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Transform for FromFn<F>
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        (self.0)(cards)
    }
}

/// Wraps a closure as a transformation.
///
/// # Example
///
/// ```
/// use deckrs::transform::{self, Transform};
///
/// let mut reverse = transform::from_fn(|mut cards| {
///     cards.reverse();
///     cards
/// });
/// let cards = reverse.apply(deckrs::deck::standard());
/// assert_eq!(cards[0].to_string(), "King of Hearts");
/// ```
#[must_use]
pub const fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    FromFn(f)
}
