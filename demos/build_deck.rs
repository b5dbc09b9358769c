//! Builds a few decks and prints them.
//!
//! Set `RUST_LOG=deckrs=trace` to see each pipeline step.

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, DeckBuilder, DeckOptions, Rank, ShuffleMode, transform};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Seed: {seed}");

    let hand = DeckOptions::default()
        .with_jokers(2)
        .with_shuffle(ShuffleMode::Seeded(seed))
        .build();
    print_cards("Top of a shuffled deck with jokers", &hand[..7]);

    let euchre = DeckBuilder::new()
        .with(transform::filter(|card| {
            matches!(card.rank(), Some(rank) if rank > Rank::Ace && rank < Rank::Nine)
        }))
        .build();
    print_cards("Euchre deck", &euchre);

    let shoe = DeckOptions::default()
        .with_decks(6)
        .with_shuffle(ShuffleMode::Seeded(seed))
        .build();
    println!("Six-deck shoe: {} cards, first is {}", shoe.len(), shoe[0]);
}

fn print_cards(title: &str, cards: &[Card]) {
    println!("{title} ({} cards):", cards.len());
    for card in cards {
        println!("  {card}");
    }
}
