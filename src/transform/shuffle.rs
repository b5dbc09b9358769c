use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

use super::Transform;

/// Puts the cards in a uniformly random order.
///
/// The shuffle owns its random source. Applying the same value more than
/// once keeps drawing from the same stream.
#[derive(Debug, Clone)]
pub struct Shuffle<R> {
    rng: R,
}

impl<R: Rng> Transform for Shuffle<R> {
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.shuffle(&mut self.rng);
        tracing::trace!(cards = cards.len(), "shuffled deck");
        cards
    }
}

/// Returns a shuffle seeded from OS entropy.
///
/// # Panics
///
/// Panics if the operating system cannot provide randomness.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle() -> Shuffle<ChaCha8Rng> {
    Shuffle {
        rng: ChaCha8Rng::from_os_rng(),
    }
}

/// Returns a reproducible shuffle seeded with `seed`.
///
/// # Example
///
/// ```
/// use deckrs::{deck, transform};
///
/// let first = deck::new([transform::shuffle_seeded(7)]);
/// let second = deck::new([transform::shuffle_seeded(7)]);
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn shuffle_seeded(seed: u64) -> Shuffle<ChaCha8Rng> {
    Shuffle {
        rng: ChaCha8Rng::seed_from_u64(seed),
    }
}

/// Returns a shuffle drawing from a caller-supplied random source.
#[must_use]
pub const fn shuffle_with<R: Rng>(rng: R) -> Shuffle<R> {
    Shuffle { rng }
}
