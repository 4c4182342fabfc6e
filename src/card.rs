//! Card types and deck constants.

use core::fmt;

use crate::error::DeckError;

/// Card suit.
///
/// The discriminants are the canonical suit order used by
/// [`default_sort`](crate::default_sort). [`Suit::Joker`] is a sentinel and
/// never appears in a base deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
    /// Joker marker.
    Joker = 4,
}

impl Suit {
    /// The four real suits in canonical order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the ordinal value of the suit.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns `true` for [`Suit::Joker`].
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = DeckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Spade),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Joker),
            _ => Err(DeckError::InvalidSuit(value)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
///
/// Real cards use `Ace` (1) through `King` (13). [`Rank::Blank`] (0) is the
/// placeholder rank carried by jokers and has no face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Sentinel rank for jokers.
    Blank = 0,
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// The thirteen real ranks, ascending.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Lowest real rank.
    pub const MIN: Self = Self::Ace;
    /// Highest real rank.
    pub const MAX: Self = Self::King;

    /// Returns the ordinal value of the rank.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Blank => "Blank",
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = DeckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Blank),
            1..=13 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(DeckError::InvalidRank(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards are plain values: two cards are equal when suit and rank match, and a
/// deck may hold any number of equal cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the pair. A real suit with
    /// [`Rank::Blank`] is accepted but sorts among the real cards of the
    /// previous suit.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Joker, Rank::Blank)
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns `true` if the card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.suit.is_joker()
    }

    /// Position of the card in the default order.
    ///
    /// Real cards map to `1..=52` (`suit * 13 + rank`). A joker also maps to
    /// 52, the same value as the King of Hearts; [`default_cmp`] breaks that
    /// tie by suit.
    ///
    /// [`default_cmp`]: crate::default_cmp
    #[must_use]
    pub const fn absolute_rank(self) -> u8 {
        self.suit.ordinal() * Rank::MAX.ordinal() + self.rank.ordinal()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str("Joker");
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
