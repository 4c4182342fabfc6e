//! Deals a few hands from a shuffled two-deck shoe with jokers.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use cardeck::{Card, DeckBuilder, DeckError, Rank, Shuffler};

const HANDS: usize = 4;
const HAND_SIZE: usize = 5;

fn main() -> Result<(), DeckError> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    println!("Dealing with seed {seed}");

    let mut shoe = DeckBuilder::new()
        .with_filter(|card| card.rank() != Rank::Two)
        .with_jokers(1)
        .with_extra_decks(1)?
        .build();
    println!("Shoe holds {} cards", shoe.len());

    let shuffler = Shuffler::new(seed);
    shuffler.shuffle(&mut shoe);

    for (seat, hand) in shoe.chunks(HAND_SIZE).take(HANDS).enumerate() {
        println!("Seat {}: {}", seat + 1, describe(hand));
    }

    Ok(())
}

fn describe(hand: &[Card]) -> String {
    hand.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
