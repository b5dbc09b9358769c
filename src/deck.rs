//! Deck construction.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::transform::Transform;

/// Returns the standard 52-card deck.
///
/// Cards are ordered by suit (`Spade`, `Diamond`, `Club`, `Heart`), then by
/// rank from `Ace` to `King`.
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Builds a deck by applying `transforms` in order to the standard deck.
///
/// # Example
///
/// ```
/// use deckrs::{deck, transform};
///
/// let cards = deck::new([transform::jokers(2)]);
/// assert_eq!(cards.len(), 54);
/// ```
pub fn new<I>(transforms: I) -> Vec<Card>
where
    I: IntoIterator,
    I::Item: Transform,
{
    transforms
        .into_iter()
        .fold(standard(), |cards, mut transform| transform.apply(cards))
}

/// An ordered pipeline of transformations applied to the standard deck.
///
/// Unlike [`new`], the builder can hold different kinds of transformation.
///
/// ```
/// use deckrs::{Rank, transform, DeckBuilder};
///
/// let cards = DeckBuilder::new()
///     .with(transform::decks(2))
///     .with(transform::filter(|card| card.rank() == Some(Rank::Two)))
///     .with(transform::jokers(4))
///     .with(transform::shuffle_seeded(42))
///     .build();
/// assert_eq!(cards.len(), 2 * 48 + 4);
/// ```
#[derive(Default)]
pub struct DeckBuilder<'a> {
    transforms: Vec<Box<dyn Transform + 'a>>,
}

impl<'a> DeckBuilder<'a> {
    /// Creates an empty pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Appends a transformation to the pipeline.
    #[must_use]
    pub fn with(mut self, transform: impl Transform + 'a) -> Self {
        self.push(transform);
        self
    }

    /// Appends a transformation to the pipeline in place.
    pub fn push(&mut self, transform: impl Transform + 'a) {
        self.transforms.push(Box::new(transform));
    }

    /// Returns the number of transformations in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns whether the pipeline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Builds the deck.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        tracing::debug!(transforms = self.transforms.len(), "building deck");

        let cards = self
            .transforms
            .into_iter()
            .enumerate()
            .fold(standard(), |cards, (step, mut transform)| {
                let cards = transform.apply(cards);
                tracing::trace!(step, cards = cards.len(), "applied transform");
                cards
            });

        tracing::debug!(cards = cards.len(), "built deck");
        cards
    }
}
