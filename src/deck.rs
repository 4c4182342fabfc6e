//! Deck construction.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::options::{DeckOption, Less};
use crate::order::default_sort;

/// Builds a deck.
///
/// With no options this is a standard 52-card deck in the default order:
/// Spade, Diamond, Club, Heart, each from Ace up to King. Options are then
/// applied in the order given, each receiving the previous result.
///
/// # Example
///
/// ```
/// use cardeck::{Card, DeckOption, Rank, Suit, new_deck};
///
/// let deck = new_deck([DeckOption::jokers(2)]);
/// assert_eq!(deck.len(), 54);
/// assert_eq!(deck[0], Card::new(Suit::Spade, Rank::Ace));
/// assert!(deck[53].is_joker());
/// ```
pub fn new_deck<I>(options: I) -> Vec<Card>
where
    I: IntoIterator<Item = DeckOption>,
{
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    default_sort(&mut cards);

    let mut applied = 0_usize;
    let cards = options.into_iter().fold(cards, |cards, option| {
        log::trace!("applying {option:?} to {} cards", cards.len());
        applied += 1;
        option.apply(cards)
    });
    log::debug!("built deck of {} cards with {applied} option(s)", cards.len());
    cards
}

/// Fluent configuration for [`new_deck`].
///
/// Each `with_*` call appends one option; [`DeckBuilder::build`] applies them
/// in the order they were added.
///
/// ```
/// use cardeck::{DeckBuilder, Rank, Suit};
///
/// let deck = DeckBuilder::new()
///     .with_filter(|card| card.rank() != Rank::Two)
///     .with_extra_decks(1)?
///     .with_jokers(2)
///     .build();
/// assert_eq!(deck.len(), 48 * 2 + 2);
/// assert_eq!(deck.iter().filter(|c| c.suit() == Suit::Joker).count(), 2);
/// # Ok::<(), cardeck::DeckError>(())
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct DeckBuilder {
    options: Vec<DeckOption>,
}

impl DeckBuilder {
    /// Creates a builder with no options.
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends `n` jokers. Counts of zero or less add nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckBuilder;
    ///
    /// assert_eq!(DeckBuilder::new().with_jokers(3).build().len(), 55);
    /// assert_eq!(DeckBuilder::new().with_jokers(-1).build().len(), 52);
    /// ```
    pub fn with_jokers(self, n: i32) -> Self {
        self.with_option(DeckOption::jokers(n))
    }

    /// Appends `k` copies of the deck as it stands at this step.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NegativeExtraDecks`] if `k` is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{DeckBuilder, DeckError};
    ///
    /// assert_eq!(DeckBuilder::new().with_extra_decks(2)?.build().len(), 156);
    /// assert_eq!(
    ///     DeckBuilder::new().with_extra_decks(-1).unwrap_err(),
    ///     DeckError::NegativeExtraDecks(-1)
    /// );
    /// # Ok::<(), DeckError>(())
    /// ```
    pub fn with_extra_decks(self, k: i32) -> Result<Self, DeckError> {
        Ok(self.with_option(DeckOption::extra_decks(k)?))
    }

    /// Keeps only cards for which `keep` returns `true`.
    pub fn with_filter<F>(self, keep: F) -> Self
    where
        F: Fn(&Card) -> bool + 'static,
    {
        self.with_option(DeckOption::filter(keep))
    }

    /// Sorts with a predicate built from the current cards.
    ///
    /// See [`DeckOption::sort_by`].
    pub fn with_sorter<F>(self, sorter: F) -> Self
    where
        F: for<'a> Fn(&'a [Card]) -> Less<'a> + 'static,
    {
        self.with_option(DeckOption::sort_by(sorter))
    }

    /// Appends an arbitrary option.
    pub fn with_option(mut self, option: DeckOption) -> Self {
        self.options.push(option);
        self
    }

    /// Number of options added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if no options have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Builds the deck.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        new_deck(self.options)
    }
}
