//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the winner can be determined.
    RoundOver,
}

impl GameState {
    /// Returns whether a round is being played.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn)
    }
}
