//! Card model and label tests.

use cardeck::{Card, DeckError, Rank, Suit};

#[test]
fn card_labels() {
    let cases = [
        (Card::new(Suit::Heart, Rank::Ace), "Ace of Hearts"),
        (Card::new(Suit::Spade, Rank::Nine), "Nine of Spades"),
        (Card::new(Suit::Diamond, Rank::King), "K of Diamonds"),
        (Card::new(Suit::Club, Rank::Jack), "J of Clubs"),
        (Card::joker(), "Joker"),
        (Card::new(Suit::Joker, Rank::Queen), "Joker"),
    ];

    for (card, expected) in cases {
        assert_eq!(card.to_string(), expected);
    }
}

#[test]
fn cards_compare_by_value() {
    let a = Card::new(Suit::Club, Rank::Seven);
    let b = Card::new(Suit::Club, Rank::Seven);
    assert_eq!(a, b);
    assert_eq!(a.suit(), Suit::Club);
    assert_eq!(a.rank(), Rank::Seven);
    assert_ne!(a, Card::new(Suit::Heart, Rank::Seven));
    assert_ne!(a, Card::new(Suit::Club, Rank::Eight));
}

#[test]
fn ordinals_are_fixed() {
    assert_eq!(Suit::Spade.ordinal(), 0);
    assert_eq!(Suit::Diamond.ordinal(), 1);
    assert_eq!(Suit::Club.ordinal(), 2);
    assert_eq!(Suit::Heart.ordinal(), 3);
    assert_eq!(Suit::Joker.ordinal(), 4);
    assert_eq!(Rank::Blank.ordinal(), 0);
    assert_eq!(Rank::Ace.ordinal(), 1);
    assert_eq!(Rank::King.ordinal(), 13);
    assert_eq!(Card::joker().rank(), Rank::Blank);
}

#[test]
fn ordinal_conversions() {
    assert_eq!(Suit::try_from(3_u8), Ok(Suit::Heart));
    assert_eq!(Suit::try_from(5_u8), Err(DeckError::InvalidSuit(5)));
    assert_eq!(Rank::try_from(0_u8), Ok(Rank::Blank));
    assert_eq!(Rank::try_from(11_u8), Ok(Rank::Jack));
    assert_eq!(Rank::try_from(14_u8), Err(DeckError::InvalidRank(14)));

    for rank in Rank::ALL {
        assert_eq!(Rank::try_from(rank.ordinal()), Ok(rank));
    }
}

#[test]
fn unchecked_cards_are_accepted() {
    let odd = Card::new(Suit::Diamond, Rank::Blank);
    assert_eq!(odd.absolute_rank(), 13);
    assert_eq!(odd.to_string(), "Blank of Diamonds");
}

#[test]
fn error_messages() {
    assert_eq!(
        DeckError::NegativeExtraDecks(-2).to_string(),
        "extra deck count cannot be negative (got -2)"
    );
    assert_eq!(DeckError::InvalidRank(20).to_string(), "invalid rank ordinal 20");
}
