//! Player and dealer identities.

use alloc::string::String;

use crate::hand::Hand;

/// A named seat at the table that owns exactly one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    hand: Hand,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the participant's current score.
    #[must_use]
    pub fn score(&self) -> u16 {
        self.hand.score()
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Replaces the hand with a fresh, empty one.
    pub(crate) fn reset_hand(&mut self) {
        self.hand = Hand::new();
    }
}
