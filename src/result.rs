//! Round outcome types.

use core::fmt;

use crate::hand::BLACKJACK;

/// Result of a finished round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21; the house wins.
    PlayerBust,
    /// Dealer went over 21; the player wins.
    DealerBust,
    /// Player has the higher score.
    PlayerWin,
    /// Dealer has the higher score.
    DealerWin,
    /// Scores are equal.
    Push,
}

impl Outcome {
    /// Decides the outcome from final scores. The first matching rule wins:
    /// player bust, dealer bust, higher score, then push.
    #[must_use]
    pub const fn from_scores(player: u16, dealer: u16) -> Self {
        if player > BLACKJACK {
            Self::PlayerBust
        } else if dealer > BLACKJACK {
            Self::DealerBust
        } else if player > dealer {
            Self::PlayerWin
        } else if player < dealer {
            Self::DealerWin
        } else {
            Self::Push
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_wins(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWin)
    }

    /// Message shown to the player at the end of the round.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "You've busted! The house wins.",
            Self::DealerBust => "Dealer busted! You win.",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "Dealer wins.",
            Self::Push => "It's a tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
