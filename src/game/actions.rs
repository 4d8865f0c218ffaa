use log::{debug, warn};
use rand::Rng;

use crate::error::ActionError;

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    fn ensure_player_turn(&self, action: &str) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            warn!("rejected {action} in state {:?}", self.state);
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns `true` if the player busted. A bust ends the round, so the
    /// winner can be determined right away and further actions are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<bool, ActionError> {
        self.ensure_player_turn("hit")?;

        let card = self.draw()?;
        self.player.hand_mut().add_card(card);
        debug!(
            "{} draws {card}, score {}",
            self.player.name(),
            self.player.score()
        );

        let busted = self.player.hand().is_bust();
        if busted {
            self.finish_round();
        }

        Ok(busted)
    }

    /// Player action: Stand (keep current hand and pass to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn("stand")?;

        debug!("{} stands on {}", self.player.name(), self.player.score());
        self.state = GameState::DealerTurn;

        Ok(())
    }
}
