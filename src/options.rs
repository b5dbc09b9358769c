//! Declarative deck configuration.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::DeckBuilder;
use crate::transform::{self, DefaultSort};

/// How the configured deck is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMode {
    /// Leave the deck in order.
    #[default]
    None,
    /// Shuffle with a fresh seed from OS entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    Random,
    /// Shuffle reproducibly with the given seed.
    Seeded(u64),
}

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, ShuffleMode};
///
/// let options = DeckOptions::default()
///     .with_decks(2)
///     .with_jokers(4)
///     .with_shuffle(ShuffleMode::Seeded(42));
/// assert_eq!(options.build().len(), 108);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of copies of the standard deck.
    pub decks: usize,
    /// Number of jokers appended after duplication.
    pub jokers: u8,
    /// Whether to apply the default sort before shuffling.
    pub sorted: bool,
    /// Shuffle applied last.
    pub shuffle: ShuffleMode,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            sorted: false,
            shuffle: ShuffleMode::None,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets whether the deck is sorted.
    #[must_use]
    pub const fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Sets the shuffle mode.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, ShuffleMode};
    ///
    /// let options = DeckOptions::default().with_shuffle(ShuffleMode::Seeded(1));
    /// assert_eq!(options.shuffle, ShuffleMode::Seeded(1));
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Expands the options into a pipeline.
    ///
    /// Steps are added in a fixed order: duplicate, add jokers, sort,
    /// shuffle. Steps that would not change the deck are left out.
    #[must_use]
    pub fn builder(&self) -> DeckBuilder<'static> {
        let mut builder = DeckBuilder::new();

        if self.decks != 1 {
            builder.push(transform::decks(self.decks));
        }
        if self.jokers > 0 {
            builder.push(transform::jokers(self.jokers));
        }
        if self.sorted {
            builder.push(DefaultSort);
        }
        match self.shuffle {
            ShuffleMode::None => {}
            #[cfg(feature = "std")]
            ShuffleMode::Random => builder.push(transform::shuffle()),
            ShuffleMode::Seeded(seed) => builder.push(transform::shuffle_seeded(seed)),
        }

        builder
    }

    /// Builds the configured deck.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        self.builder().build()
    }
}
