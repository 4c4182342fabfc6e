//! Error types for deck construction.

use thiserror::Error;

/// Errors that can occur while configuring or decoding a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Extra deck count is negative.
    #[error("extra deck count cannot be negative (got {0})")]
    NegativeExtraDecks(i32),
    /// Suit ordinal out of range.
    #[error("invalid suit ordinal {0}")]
    InvalidSuit(u8),
    /// Rank ordinal out of range.
    #[error("invalid rank ordinal {0}")]
    InvalidRank(u8),
}
