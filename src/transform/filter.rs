use alloc::vec::Vec;

use crate::card::Card;

use super::Transform;

/// Removes cards matching a predicate. See [`filter`].
#[derive(Clone, Copy)]
pub struct Filter<P>(P);

impl<P> Transform for Filter<P>
where
    P: FnMut(&Card) -> bool,
{
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        let before = cards.len();
        cards.retain(|card| !(self.0)(card));
        tracing::trace!(removed = before - cards.len(), "filtered deck");
        cards
    }
}

/// Returns a transformation removing every card for which `remove` is true.
///
/// The remaining cards keep their relative order.
///
/// # Example
///
/// ```
/// use deckrs::{Rank, deck, transform};
///
/// let cards = deck::new([transform::filter(|card| card.rank() == Some(Rank::Ace))]);
/// assert_eq!(cards.len(), 48);
/// ```
#[must_use]
pub const fn filter<P>(remove: P) -> Filter<P>
where
    P: FnMut(&Card) -> bool,
{
    Filter(remove)
}
