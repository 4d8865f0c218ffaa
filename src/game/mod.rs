//! Game engine and state management.

use log::{error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, EmptyDeckError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::participant::Participant;
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// The dealer draws while their score is below this value.
pub const DEALER_STANDS_ON: u16 = 17;

/// A single-player blackjack engine.
///
/// The game owns the deck, the player, the dealer, and the random source used
/// to shuffle each round's deck. Renderers read hands and scores through the
/// query methods after each command; they never mutate game state directly.
///
/// The random source defaults to [`ChaCha8Rng`] seeded through [`Game::new`];
/// any [`Rng`] can be injected with [`Game::with_rng`].
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    options: GameOptions,
    deck: Deck,
    player: Participant,
    dealer: Participant,
    state: GameState,
    rng: R,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game that shuffles with `rng`.
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        let player = Participant::new(options.player_name.clone());
        let dealer = Participant::new(options.dealer_name.clone());

        Self {
            deck: Deck::empty(),
            options,
            player,
            dealer,
            state: GameState::NotStarted,
            rng,
        }
    }

    /// Starts a new round with a freshly built and shuffled deck.
    ///
    /// Both hands are replaced, then two cards each are dealt alternately
    /// (player, dealer, player, dealer). Any previous round is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the configured suits and ranks do not
    /// provide enough cards for the opening deal.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        let mut deck = Deck::new(&self.options.suits, &self.options.ranks);
        deck.shuffle(&mut self.rng);
        self.start_round_with_deck(deck)
    }

    /// Starts a new round dealing from `deck` as given, without shuffling.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if `deck` holds fewer than four cards.
    /// The game is left in [`GameState::NotStarted`] in that case.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<(), DealError> {
        self.deck = deck;
        self.player.reset_hand();
        self.dealer.reset_hand();
        self.state = GameState::NotStarted;

        info!("starting round with {} cards in the deck", self.deck.len());

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.hand_mut().add_card(card);
            let card = self.draw()?;
            self.dealer.hand_mut().add_card(card);
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Draws the next card from the deck.
    fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.deck
            .deal()
            .inspect_err(|_| error!("deck exhausted while dealing"))
    }

    /// Ends the round and logs the result.
    fn finish_round(&mut self) {
        self.state = GameState::RoundOver;
        let outcome = Outcome::from_scores(self.player.score(), self.dealer.score());
        info!(
            "round over: {} {} vs {} {} ({outcome:?})",
            self.player.name(),
            self.player.score(),
            self.dealer.name(),
            self.dealer.score(),
        );
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the options this game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        self.player.hand()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        self.dealer.hand()
    }

    /// Returns the player's current score.
    #[must_use]
    pub fn player_score(&self) -> u16 {
        self.player.score()
    }

    /// Returns the dealer's current score.
    #[must_use]
    pub fn dealer_score(&self) -> u16 {
        self.dealer.score()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
