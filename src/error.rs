//! Error types for deck and game operations.

use thiserror::Error;

/// Returned when dealing from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur while dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck ran out before the opening cards were dealt.
    #[error("not enough cards in the deck to deal a round")]
    EmptyDeck,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for dealer play.
    #[error("invalid game state for dealer play")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when determining the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The round is not over yet.
    #[error("the round is not over yet")]
    InvalidState,
}

impl From<EmptyDeckError> for DealError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<EmptyDeckError> for ActionError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<EmptyDeckError> for DealerError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}
