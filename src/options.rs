//! Deck options.
//!
//! A [`DeckOption`] is one step of deck construction: it receives the cards
//! produced so far and returns the cards handed to the next step. Options are
//! applied exactly once each, in the order the caller supplied them.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter;

use crate::card::Card;
use crate::error::DeckError;

/// Ordering predicate over positions in a deck.
///
/// `less(i, j)` returns `true` when the card at index `i` sorts before the
/// card at index `j`.
pub type Less<'a> = Box<dyn Fn(usize, usize) -> bool + 'a>;

/// Builds a [`Less`] predicate from the deck it will sort.
pub type DeckSorter = dyn for<'a> Fn(&'a [Card]) -> Less<'a>;

/// Predicate deciding which cards stay in the deck.
pub type CardFilter = dyn Fn(&Card) -> bool;

/// Arbitrary deck transformation.
pub type Transform = dyn Fn(Vec<Card>) -> Vec<Card>;

/// A single deck construction step.
///
/// Use the constructors ([`DeckOption::jokers`], [`DeckOption::extra_decks`],
/// [`DeckOption::filter`], [`DeckOption::sort_by`]) or the `with_*` methods on
/// [`DeckBuilder`](crate::DeckBuilder).
#[non_exhaustive]
pub enum DeckOption {
    /// Append this many jokers.
    Jokers(usize),
    /// Append this many copies of the deck as it stands.
    ExtraDecks(usize),
    /// Keep only cards matching the predicate.
    Filter(Box<CardFilter>),
    /// Sort with a caller-built ordering predicate.
    Sort(Box<DeckSorter>),
    /// Caller-defined transformation.
    Custom(Box<Transform>),
}

impl DeckOption {
    /// Appends `n` jokers to the end of the deck.
    ///
    /// A count of zero or less adds nothing.
    #[must_use]
    pub const fn jokers(n: i32) -> Self {
        if n <= 0 { Self::Jokers(0) } else { Self::Jokers(n as usize) }
    }

    /// Appends `k` copies of the deck as it exists when the option runs.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NegativeExtraDecks`] if `k` is negative.
    pub const fn extra_decks(k: i32) -> Result<Self, DeckError> {
        if k < 0 {
            return Err(DeckError::NegativeExtraDecks(k));
        }
        Ok(Self::ExtraDecks(k as usize))
    }

    /// Keeps only the cards for which `keep` returns `true`, preserving their
    /// relative order.
    #[must_use]
    pub fn filter<F>(keep: F) -> Self
    where
        F: Fn(&Card) -> bool + 'static,
    {
        Self::Filter(Box::new(keep))
    }

    /// Sorts the deck with a predicate built from the deck itself.
    ///
    /// `sorter` is called once with the current cards and returns `less(i, j)`
    /// over their indices. Equal cards have no guaranteed relative order.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{DeckOption, Rank, new_deck};
    ///
    /// let by_rank_desc = DeckOption::sort_by(|cards| {
    ///     Box::new(move |i: usize, j: usize| cards[i].rank().ordinal() > cards[j].rank().ordinal())
    /// });
    /// let deck = new_deck([by_rank_desc]);
    /// assert_eq!(deck[0].rank(), Rank::King);
    /// assert_eq!(deck[51].rank(), Rank::Ace);
    /// ```
    #[must_use]
    pub fn sort_by<F>(sorter: F) -> Self
    where
        F: for<'a> Fn(&'a [Card]) -> Less<'a> + 'static,
    {
        Self::Sort(Box::new(sorter))
    }

    /// Wraps an arbitrary transformation.
    #[must_use]
    pub fn custom<F>(transform: F) -> Self
    where
        F: Fn(Vec<Card>) -> Vec<Card> + 'static,
    {
        Self::Custom(Box::new(transform))
    }

    /// Applies the option to `cards`.
    #[must_use]
    pub fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        match self {
            Self::Jokers(n) => {
                cards.extend(iter::repeat_n(Card::joker(), *n));
                cards
            }
            Self::ExtraDecks(k) => {
                let len = cards.len();
                cards.reserve(len * k);
                for _ in 0..*k {
                    cards.extend_from_within(..len);
                }
                cards
            }
            Self::Filter(keep) => {
                cards.retain(|card| keep(card));
                cards
            }
            Self::Sort(sorter) => {
                let order = sorted_indices(&cards, sorter);
                order.into_iter().map(|i| cards[i]).collect()
            }
            Self::Custom(transform) => transform(cards),
        }
    }
}

fn sorted_indices(cards: &[Card], sorter: &DeckSorter) -> Vec<usize> {
    let less = sorter(cards);
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_unstable_by(|&i, &j| {
        if less(i, j) {
            Ordering::Less
        } else if less(j, i) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    order
}

impl fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jokers(n) => f.debug_tuple("Jokers").field(n).finish(),
            Self::ExtraDecks(k) => f.debug_tuple("ExtraDecks").field(k).finish(),
            Self::Filter(_) => f.write_str("Filter(..)"),
            Self::Sort(_) => f.write_str("Sort(..)"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
