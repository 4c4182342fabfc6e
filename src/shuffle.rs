//! Shuffling.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::new_deck;
use crate::options::DeckOption;
use crate::sync::Mutex;

/// Shuffles `cards` in place and returns the same slice.
///
/// Fisher-Yates: walking from the last index down to 1, each card is swapped
/// with a uniformly chosen card at or below it. The result depends only on
/// the state of `rng`, so equal seeds give equal permutations for decks of
/// equal length.
///
/// # Example
///
/// ```
/// use cardeck::{new_deck, shuffle};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut a = new_deck([]);
/// let mut b = new_deck([]);
/// shuffle(&mut a, &mut ChaCha8Rng::seed_from_u64(7));
/// shuffle(&mut b, &mut ChaCha8Rng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn shuffle<'a, R>(cards: &'a mut [Card], rng: &mut R) -> &'a mut [Card]
where
    R: Rng + ?Sized,
{
    log::trace!("shuffling {} cards", cards.len());
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
    cards
}

/// A seeded random source that can be shared between threads.
///
/// [`shuffle`] borrows its generator mutably, so callers sharing one generator
/// must lock around it themselves. `Shuffler` does that locking: every method
/// takes `&self` and holds the lock for the duration of a single shuffle.
pub struct Shuffler {
    rng: Mutex<ChaCha8Rng>,
}

impl Shuffler {
    /// Creates a shuffler seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Shuffler, default_sort, new_deck};
    ///
    /// let shuffler = Shuffler::new(42);
    /// let mut deck = new_deck([]);
    /// shuffler.shuffle(&mut deck);
    /// default_sort(&mut deck);
    /// assert_eq!(deck, new_deck([]));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Resets the generator to the state [`Shuffler::new`] would give it.
    pub fn reseed(&self, seed: u64) {
        *self.rng.lock() = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Shuffles `cards` in place.
    pub fn shuffle<'a>(&self, cards: &'a mut [Card]) -> &'a mut [Card] {
        let mut rng = self.rng.lock();
        shuffle(cards, &mut *rng)
    }

    /// Builds a deck with `options` and shuffles it.
    pub fn shuffled_deck<I>(&self, options: I) -> Vec<Card>
    where
        I: IntoIterator<Item = DeckOption>,
    {
        let mut cards = new_deck(options);
        self.shuffle(&mut cards);
        cards
    }
}

impl core::fmt::Debug for Shuffler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shuffler").finish_non_exhaustive()
    }
}
