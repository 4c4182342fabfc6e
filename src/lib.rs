//! Configurable playing-card decks with optional `no_std` support.
//!
//! [`new_deck`] generates a standard 52-card deck in the default order and
//! then applies a caller-supplied list of [`DeckOption`]s, in order: add
//! jokers, append extra decks, filter, or sort with a custom predicate.
//! [`shuffle`] permutes a deck with an injected random source and
//! [`default_sort`] restores the default order.
//!
//! # Example
//!
//! ```
//! use cardeck::{DeckBuilder, Shuffler, default_sort};
//!
//! let mut deck = DeckBuilder::new().with_jokers(2).with_extra_decks(1)?.build();
//! assert_eq!(deck.len(), 108);
//!
//! let shuffler = Shuffler::new(42);
//! shuffler.shuffle(&mut deck);
//! default_sort(&mut deck);
//! assert!(deck[104..].iter().all(|card| card.is_joker()));
//! # Ok::<(), cardeck::DeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod order;
pub mod shuffle;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{DeckBuilder, new_deck};
pub use error::DeckError;
pub use options::{CardFilter, DeckOption, DeckSorter, Less, Transform};
pub use order::{default_cmp, default_sort};
pub use shuffle::{Shuffler, shuffle};
