//! Shuffle tests.

use std::sync::Arc;
use std::thread;

use cardeck::{Card, DeckOption, Shuffler, default_cmp, default_sort, new_deck, shuffle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by(default_cmp);
    cards
}

#[test]
fn shuffle_then_default_sort_round_trips() {
    for seed in 0..16 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = new_deck([]);
        default_sort(shuffle(&mut deck, &mut rng));
        assert_eq!(deck, new_deck([]));
    }
}

#[test]
fn shuffle_preserves_multiset() {
    let original = new_deck([DeckOption::jokers(3), DeckOption::extra_decks(2).unwrap()]);
    let mut deck = original.clone();
    shuffle(&mut deck, &mut ChaCha8Rng::seed_from_u64(9));

    assert_eq!(deck.len(), original.len());
    assert_ne!(deck, original);
    assert_eq!(sorted(deck), sorted(original));
}

#[test]
fn equal_seeds_give_equal_permutations() {
    let mut a = new_deck([]);
    let mut b = new_deck([DeckOption::filter(|_| true)]);
    shuffle(&mut a, &mut ChaCha8Rng::seed_from_u64(1234));
    shuffle(&mut b, &mut ChaCha8Rng::seed_from_u64(1234));
    assert_eq!(a, b);

    let mut c = new_deck([]);
    shuffle(&mut c, &mut ChaCha8Rng::seed_from_u64(4321));
    assert_ne!(a, c);
}

#[test]
fn shuffle_returns_same_slice() {
    let mut deck = new_deck([]);
    let ptr = deck.as_ptr();
    let shuffled = shuffle(&mut deck, &mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(shuffled.as_ptr(), ptr);
    assert_eq!(shuffled.len(), 52);
}

#[test]
fn shuffle_handles_tiny_decks() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut empty: Vec<Card> = Vec::new();
    assert!(shuffle(&mut empty, &mut rng).is_empty());

    let mut one = vec![Card::joker()];
    assert_eq!(shuffle(&mut one, &mut rng)[0], Card::joker());
}

#[test]
fn shuffler_reseed_repeats_trace() {
    let shuffler = Shuffler::new(5);
    let first = shuffler.shuffled_deck([]);
    let second = shuffler.shuffled_deck([]);
    assert_ne!(first, second);

    shuffler.reseed(5);
    assert_eq!(shuffler.shuffled_deck([]), first);
}

#[test]
fn shuffler_matches_free_function() {
    let shuffler = Shuffler::new(77);
    let mut a = new_deck([]);
    shuffler.shuffle(&mut a);

    let mut b = new_deck([]);
    shuffle(&mut b, &mut ChaCha8Rng::seed_from_u64(77));
    assert_eq!(a, b);
}

#[test]
fn shuffler_is_shareable_across_threads() {
    let shuffler = Arc::new(Shuffler::new(11));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shuffler = Arc::clone(&shuffler);
            thread::spawn(move || sorted(shuffler.shuffled_deck([])))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), new_deck([]));
    }
}
