//! Game configuration options.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Rank, Suit};

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::{GameOptions, Suit};
///
/// let options = GameOptions::default()
///     .with_player_name("Ada")
///     .with_suits([Suit::Spades, Suit::Hearts]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Suits used to build each round's deck.
    pub suits: Vec<Suit>,
    /// Ranks used to build each round's deck.
    pub ranks: Vec<Rank>,
    /// Display name of the player.
    pub player_name: String,
    /// Display name of the dealer.
    pub dealer_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            suits: Suit::ALL.to_vec(),
            ranks: Rank::ALL.to_vec(),
            player_name: String::from("Player"),
            dealer_name: String::from("Dealer"),
        }
    }
}

impl GameOptions {
    /// Sets the suits used to build the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{GameOptions, Suit};
    ///
    /// let options = GameOptions::default().with_suits([Suit::Clubs]);
    /// assert_eq!(options.suits, vec![Suit::Clubs]);
    /// ```
    #[must_use]
    pub fn with_suits(mut self, suits: impl IntoIterator<Item = Suit>) -> Self {
        self.suits = suits.into_iter().collect();
        self
    }

    /// Sets the ranks used to build the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{GameOptions, Rank};
    ///
    /// let options = GameOptions::default().with_ranks([Rank::Ace, Rank::King]);
    /// assert_eq!(options.ranks, vec![Rank::Ace, Rank::King]);
    /// ```
    #[must_use]
    pub fn with_ranks(mut self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.ranks = ranks.into_iter().collect();
        self
    }

    /// Sets the player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("Ada");
    /// assert_eq!(options.player_name, "Ada");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the dealer's display name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }
}
