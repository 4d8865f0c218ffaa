use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::card::Card;
use crate::error::{DealerError, OutcomeError};
use crate::result::Outcome;

use super::{DEALER_STANDS_ON, Game, GameState};

impl<R: Rng> Game<R> {
    fn ensure_dealer_turn(&self) -> Result<(), DealerError> {
        if self.state != GameState::DealerTurn {
            warn!("rejected dealer play in state {:?}", self.state);
            return Err(DealerError::InvalidState);
        }
        Ok(())
    }

    /// Dealer plays out their hand, drawing until the score reaches 17 or more.
    ///
    /// Returns the cards drawn by the dealer, which may be none. The round is
    /// over once this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        self.ensure_dealer_turn()?;

        let start = self.dealer.hand().len();
        while !self.dealer_draw_one()? {}

        Ok(self.dealer.hand().cards()[start..].to_vec())
    }

    /// Step-wise dealer play for renderers that reveal one card at a time.
    ///
    /// Draws a single card if the dealer is below 17 and returns `true` once the
    /// dealer is done, at which point the round is over. Calling this until it
    /// returns `true` ends in the same hand as [`Game::dealer_play`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_draw_one(&mut self) -> Result<bool, DealerError> {
        self.ensure_dealer_turn()?;

        if self.dealer.score() < DEALER_STANDS_ON {
            let card = self.draw()?;
            self.dealer.hand_mut().add_card(card);
            debug!(
                "{} draws {card}, score {}",
                self.dealer.name(),
                self.dealer.score()
            );
        }

        let done = self.dealer.score() >= DEALER_STANDS_ON;
        if done {
            self.finish_round();
        }

        Ok(done)
    }

    /// Determines the winner of the finished round.
    ///
    /// This is a pure read of both hands and returns the same outcome on every
    /// call until a new round starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn determine_winner(&self) -> Result<Outcome, OutcomeError> {
        if self.state != GameState::RoundOver {
            return Err(OutcomeError::InvalidState);
        }

        Ok(Outcome::from_scores(
            self.player.score(),
            self.dealer.score(),
        ))
    }
}
