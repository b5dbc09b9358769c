use alloc::vec::Vec;

use crate::card::Card;

use super::Transform;

/// Appends jokers tagged `0..n`. See [`jokers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jokers(pub u8);

impl Transform for Jokers {
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.extend((0..self.0).map(Card::joker));
        cards
    }
}

/// Returns a transformation appending `n` jokers to the end of the deck.
///
/// Each joker gets a distinct tag from `0` to `n - 1`.
#[must_use]
pub const fn jokers(n: u8) -> Jokers {
    Jokers(n)
}

/// Repeats the deck. See [`decks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decks(pub usize);

impl Transform for Decks {
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        cards.repeat(self.0)
    }
}

/// Returns a transformation laying out `n` consecutive copies of the deck.
///
/// `decks(1)` leaves the deck unchanged and `decks(0)` empties it.
///
/// # Example
///
/// ```
/// use deckrs::{DECK_SIZE, deck, transform};
///
/// let shoe = deck::new([transform::decks(6)]);
/// assert_eq!(shoe.len(), 6 * DECK_SIZE);
/// ```
#[must_use]
pub const fn decks(n: usize) -> Decks {
    Decks(n)
}
