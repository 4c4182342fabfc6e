//! Default card ordering.

use core::cmp::Ordering;

use crate::card::Card;

/// Compares two cards in the default order.
///
/// Cards are ordered by [`Card::absolute_rank`]: Spade, Diamond, Club, Heart,
/// ranks ascending within each suit. Jokers share their absolute rank with the
/// King of Hearts, so ties fall back to the suit ordinal and jokers come last.
#[must_use]
pub fn default_cmp(a: &Card, b: &Card) -> Ordering {
    a.absolute_rank()
        .cmp(&b.absolute_rank())
        .then_with(|| a.suit().ordinal().cmp(&b.suit().ordinal()))
}

/// Sorts cards into the default order and returns the same slice.
///
/// Equal cards (from merged decks) have no guaranteed relative order.
///
/// # Example
///
/// ```
/// use cardeck::{Card, Rank, Suit, default_sort};
///
/// let mut cards = vec![
///     Card::joker(),
///     Card::new(Suit::Heart, Rank::Two),
///     Card::new(Suit::Spade, Rank::King),
/// ];
/// default_sort(&mut cards);
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::King));
/// assert!(cards[2].is_joker());
/// ```
pub fn default_sort(cards: &mut [Card]) -> &mut [Card] {
    cards.sort_unstable_by(default_cmp);
    cards
}
