use core::cmp::Ordering;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;

use super::Transform;

/// A comparator produced from the sequence being sorted. See [`sort_with`].
pub type Comparator<'a> = Box<dyn FnMut(&Card, &Card) -> Ordering + 'a>;

/// Compares two cards by [`Card::abs_rank`], with a joker after any
/// standard card of equal absolute rank.
#[must_use]
pub fn default_order(a: &Card, b: &Card) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

// Joker 0 shares the King of Hearts' absolute rank.
const fn sort_key(card: &Card) -> (u16, bool) {
    (card.abs_rank(), card.is_joker())
}

/// Sorts by suit, then rank, with jokers last.
///
/// The sort is stable: identical cards keep their order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultSort;

impl Transform for DefaultSort {
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_by_key(sort_key);
        cards
    }
}

/// Sorts with a fixed comparator. See [`sort_by`].
#[derive(Clone, Copy)]
pub struct SortBy<F>(F);

impl<F> Transform for SortBy<F>
where
    F: FnMut(&Card, &Card) -> Ordering,
{
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_by(&mut self.0);
        cards
    }
}

/// Returns a transformation sorting with `compare`.
#[must_use]
pub const fn sort_by<F>(compare: F) -> SortBy<F>
where
    F: FnMut(&Card, &Card) -> Ordering,
{
    SortBy(compare)
}

/// Sorts with a comparator derived from the sequence. See [`sort_with`].
#[derive(Clone, Copy)]
pub struct SortWith<F>(F);

impl<F> Transform for SortWith<F>
where
    F: for<'a> FnMut(&'a [Card]) -> Comparator<'a>,
{
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        // The comparator borrows a snapshot so `cards` stays free to reorder.
        let snapshot = cards.clone();
        let mut compare = (self.0)(&snapshot);
        cards.sort_by(|a, b| compare(a, b));
        cards
    }
}

/// Returns a transformation whose comparator is built from the sequence it
/// is about to sort.
///
/// `factory` sees the cards in their order before sorting, which allows
/// comparators keyed on position or on the deck's contents.
///
/// # Example
///
/// ```
/// use deckrs::transform::{self, Comparator};
/// use deckrs::{Card, deck};
///
/// // Reverse the deck by comparing original positions.
/// let cards = deck::new([transform::sort_with(|cards| {
///     let position = move |card: &Card| cards.iter().position(|c| c == card);
///     Box::new(move |a: &Card, b: &Card| position(b).cmp(&position(a))) as Comparator<'_>
/// })]);
/// assert_eq!(cards[0].to_string(), "King of Hearts");
/// ```
#[must_use]
pub const fn sort_with<F>(factory: F) -> SortWith<F>
where
    F: for<'a> FnMut(&'a [Card]) -> Comparator<'a>,
{
    SortWith(factory)
}
