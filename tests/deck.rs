//! Deck building integration tests.

use core::cmp::Ordering;
use std::collections::HashSet;

use deckrs::transform::{self, Comparator, Transform, default_order};
use deckrs::{
    Card, DECK_SIZE, DeckBuilder, DeckOptions, DefaultSort, ParseCardError, ParseRankError,
    ParseSuitError, Rank, ShuffleMode, Suit, deck,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn matching_positions(a: &[Card], b: &[Card]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x == y).count()
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    DefaultSort.apply(cards.to_vec())
}

#[test]
fn standard_deck_has_every_card_once() {
    let cards = deck::new(Vec::<DefaultSort>::new());
    assert_eq!(cards.len(), DECK_SIZE);
    assert!(cards.iter().all(|c| !c.is_joker()));

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(suit, rank)), "missing {rank} of {suit}s");
        }
    }
}

#[test]
fn standard_deck_is_suit_major() {
    let cards = deck::standard();
    assert_eq!(cards[0], card(Suit::Spade, Rank::Ace));
    assert_eq!(cards[12], card(Suit::Spade, Rank::King));
    assert_eq!(cards[13], card(Suit::Diamond, Rank::Ace));
    assert_eq!(cards[51], card(Suit::Heart, Rank::King));
}

#[test]
fn default_sort_restores_canonical_order() {
    let cards = deck::new([transform::shuffle_seeded(3)]);
    let cards = DefaultSort.apply(cards);

    assert_eq!(cards[0], card(Suit::Spade, Rank::Ace));
    assert_eq!(cards[DECK_SIZE - 1], card(Suit::Heart, Rank::King));
    assert!(cards.windows(2).all(|w| w[0].abs_rank() < w[1].abs_rank()));
    assert_eq!(cards, deck::standard());
}

#[test]
fn default_sort_keeps_jokers_after_standard_cards() {
    for seed in 0..50 {
        let cards = DeckBuilder::new()
            .with(transform::jokers(3))
            .with(transform::shuffle_seeded(seed))
            .with(DefaultSort)
            .build();

        assert_eq!(
            cards[DECK_SIZE - 1],
            card(Suit::Heart, Rank::King),
            "seed {seed}"
        );
        assert!(cards[DECK_SIZE..].iter().all(|c| c.is_joker()), "seed {seed}");
        assert!(cards[..DECK_SIZE].iter().all(|c| !c.is_joker()), "seed {seed}");
        assert!(
            cards
                .windows(2)
                .all(|w| w[0].abs_rank() <= w[1].abs_rank())
        );
    }
}

#[test]
fn default_order_puts_joker_after_tied_king() {
    let king = card(Suit::Heart, Rank::King);
    let joker = Card::joker(0);
    assert_eq!(king.abs_rank(), joker.abs_rank());
    assert_eq!(default_order(&king, &joker), Ordering::Less);
    assert_eq!(default_order(&joker, &king), Ordering::Greater);

    let cards = DefaultSort.apply(vec![joker, king]);
    assert_eq!(cards, [king, joker]);
}

#[test]
fn sort_by_custom_comparator() {
    let cards = deck::new([transform::sort_by(|a: &Card, b: &Card| {
        a.rank()
            .cmp(&b.rank())
            .then(a.suit().index().cmp(&b.suit().index()))
    })]);

    assert_eq!(
        &cards[..4],
        &[
            card(Suit::Spade, Rank::Ace),
            card(Suit::Diamond, Rank::Ace),
            card(Suit::Club, Rank::Ace),
            card(Suit::Heart, Rank::Ace),
        ]
    );
    assert_eq!(cards[DECK_SIZE - 1], card(Suit::Heart, Rank::King));
}

#[test]
fn sort_with_sees_the_deck_before_sorting() {
    let cards = deck::new([transform::sort_with(|cards| {
        let position = move |card: &Card| cards.iter().position(|c| c == card);
        Box::new(move |a: &Card, b: &Card| position(b).cmp(&position(a))) as Comparator<'_>
    })]);

    let mut expected = deck::standard();
    expected.reverse();
    assert_eq!(cards, expected);
}

#[test]
fn shuffle_is_a_permutation() {
    let original = deck::standard();

    for seed in 0..10 {
        let shuffled = transform::shuffle_seeded(seed).apply(original.clone());
        assert_eq!(shuffled.len(), original.len());
        assert_eq!(sorted(&shuffled), original);
        assert!(
            matching_positions(&original, &shuffled) < DECK_SIZE / 2,
            "seed {seed} left the deck mostly in place"
        );
    }
}

#[cfg(feature = "std")]
#[test]
fn random_shuffle_moves_cards() {
    let original = deck::standard();
    let shuffled = deck::new([transform::shuffle()]);

    assert_eq!(sorted(&shuffled), original);
    assert!(matching_positions(&original, &shuffled) < DECK_SIZE / 2);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let a = deck::new([transform::shuffle_seeded(42)]);
    let b = deck::new([transform::shuffle_seeded(42)]);
    let c = deck::new([transform::shuffle_seeded(43)]);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn shuffle_reuse_continues_the_stream() {
    let mut shuffle = transform::shuffle_seeded(5);
    let first = deck::new([&mut shuffle]);
    let second = deck::new([&mut shuffle]);

    assert_ne!(first, second);
    assert_eq!(first, deck::new([transform::shuffle_seeded(5)]));
}

#[test]
fn shuffle_with_caller_rng() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let a = deck::new([transform::shuffle_with(ChaCha8Rng::seed_from_u64(9))]);
    let b = deck::new([transform::shuffle_seeded(9)]);
    assert_eq!(a, b);
}

#[test]
fn jokers_are_appended_with_distinct_tags() {
    let cards = deck::new([transform::jokers(5)]);
    assert_eq!(cards.len(), DECK_SIZE + 5);
    assert_eq!(cards.iter().filter(|c| c.suit() == Suit::Joker).count(), 5);
    assert_eq!(&cards[..DECK_SIZE], deck::standard().as_slice());

    let tags: Vec<Option<u8>> = cards[DECK_SIZE..].iter().map(|c| c.joker_tag()).collect();
    assert_eq!(tags, [Some(0), Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn zero_jokers_is_a_no_op() {
    assert_eq!(deck::new([transform::jokers(0)]), deck::standard());
}

#[test]
fn filter_removes_matching_cards() {
    let cards = deck::new([transform::filter(|card| {
        card.rank() == Some(Rank::Two) || card.rank() == Some(Rank::Three)
    })]);

    assert_eq!(cards.len(), 44);
    assert!(
        cards
            .iter()
            .all(|c| c.rank() != Some(Rank::Two) && c.rank() != Some(Rank::Three))
    );
    assert!(cards.windows(2).all(|w| w[0].abs_rank() < w[1].abs_rank()));
}

#[test]
fn filter_everything_yields_empty_deck() {
    let cards = deck::new([transform::filter(|_| true)]);
    assert!(cards.is_empty());
}

#[test]
fn decks_concatenates_copies() {
    let cards = deck::new([transform::decks(3)]);
    assert_eq!(cards.len(), DECK_SIZE * 3);

    let original = deck::standard();
    for copy in cards.chunks(DECK_SIZE) {
        assert_eq!(copy, original.as_slice());
    }
}

#[test]
fn decks_edge_counts() {
    assert_eq!(deck::new([transform::decks(1)]), deck::standard());
    assert!(deck::new([transform::decks(0)]).is_empty());
}

#[test]
fn pipeline_applies_in_order() {
    let jokers_then_copies = DeckBuilder::new()
        .with(transform::jokers(2))
        .with(transform::decks(2))
        .build();
    let copies_then_jokers = DeckBuilder::new()
        .with(transform::decks(2))
        .with(transform::jokers(2))
        .build();

    assert_eq!(jokers_then_copies.len(), 2 * (DECK_SIZE + 2));
    assert_eq!(copies_then_jokers.len(), 2 * DECK_SIZE + 2);
    assert!(jokers_then_copies[DECK_SIZE].is_joker());
    assert!(!copies_then_jokers[DECK_SIZE].is_joker());
}

#[test]
fn builder_accepts_closures() {
    let mut builder = DeckBuilder::new();
    assert!(builder.is_empty());

    builder.push(transform::from_fn(|mut cards| {
        cards.truncate(10);
        cards
    }));
    builder.push(transform::jokers(1));
    assert_eq!(builder.len(), 2);

    let cards = builder.build();
    assert_eq!(cards.len(), 11);
    assert_eq!(cards[9], card(Suit::Spade, Rank::Ten));
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Heart, Rank::Ace).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Diamond, Rank::Four).to_string(), "Four of Diamonds");
    assert_eq!(card(Suit::Spade, Rank::Jack).to_string(), "Jack of Spades");
    assert_eq!(card(Suit::Club, Rank::Nine).to_string(), "Nine of Clubs");
    assert_eq!(Card::joker(0).to_string(), "Joker");
    assert_eq!(Card::joker(7).to_string(), "Joker");
}

#[test]
fn card_text_round_trip() {
    for original in deck::standard() {
        let parsed: Card = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }

    let joker: Card = Card::joker(3).to_string().parse().unwrap();
    assert!(joker.is_joker());
    assert_eq!(joker.joker_tag(), Some(0));
}

#[test]
fn card_parse_errors() {
    assert_eq!(
        "Ace Hearts".parse::<Card>(),
        Err(ParseCardError::MissingSeparator)
    );
    assert_eq!(
        "Ace of Heart".parse::<Card>(),
        Err(ParseCardError::MissingPluralSuffix)
    );
    assert_eq!(
        "One of Hearts".parse::<Card>(),
        Err(ParseCardError::Rank(ParseRankError))
    );
    assert_eq!(
        "Ace of Stars".parse::<Card>(),
        Err(ParseCardError::Suit(ParseSuitError))
    );
    assert_eq!(
        "Ace of Jokers".parse::<Card>(),
        Err(ParseCardError::Suit(ParseSuitError))
    );
}

#[test]
fn options_builder_sets_fields() {
    let options = DeckOptions::default()
        .with_decks(4)
        .with_jokers(2)
        .with_sorted(true)
        .with_shuffle(ShuffleMode::Seeded(8));

    assert_eq!(options.decks, 4);
    assert_eq!(options.jokers, 2);
    assert!(options.sorted);
    assert_eq!(options.shuffle, ShuffleMode::Seeded(8));
    assert_eq!(options.builder().len(), 4);
}

#[test]
fn default_options_build_standard_deck() {
    let options = DeckOptions::default();
    assert!(options.builder().is_empty());
    assert_eq!(options.build(), deck::standard());
}

#[test]
fn options_match_equivalent_pipeline() {
    let options = DeckOptions::default()
        .with_decks(2)
        .with_jokers(3)
        .with_shuffle(ShuffleMode::Seeded(21));

    let expected = DeckBuilder::new()
        .with(transform::decks(2))
        .with(transform::jokers(3))
        .with(transform::shuffle_seeded(21))
        .build();

    assert_eq!(options.build(), expected);
}

#[test]
fn sorted_options_group_copies() {
    let cards = DeckOptions::default().with_decks(2).with_sorted(true).build();
    assert_eq!(cards.len(), 2 * DECK_SIZE);
    assert_eq!(cards[0], card(Suit::Spade, Rank::Ace));
    assert_eq!(cards[1], card(Suit::Spade, Rank::Ace));
    assert_eq!(cards[2], card(Suit::Spade, Rank::Two));
}

#[cfg(feature = "std")]
#[test]
fn random_options_shuffle() {
    let cards = DeckOptions::default()
        .with_shuffle(ShuffleMode::Random)
        .build();
    assert_eq!(sorted(&cards), deck::standard());
}
