use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::result::RoundOutcome;

use super::{Table, TablePhase, TableView};

impl Table {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != TablePhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust settles the round at once with no payout; the dealer does not
    /// play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<TableView, ActionError> {
        self.ensure_player_turn()?;

        let card = self.shoe.draw();
        self.player_hand.add_card(card);

        if self.player_hand.status() == HandStatus::Bust {
            self.settle(RoundOutcome::Bust);
        }

        Ok(self.view())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Hands control to the dealer; drive the dealer with
    /// [`dealer_step`](Self::dealer_step) or [`dealer_play`](Self::dealer_play).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<TableView, ActionError> {
        self.ensure_player_turn()?;

        self.start_dealer_turn();

        Ok(self.view())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// Allowed at any point of the player's turn as long as the balance
    /// covers the current bet a second time.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the player lacks
    /// funds. Nothing changes on error.
    pub fn double_down(&mut self) -> Result<TableView, ActionError> {
        self.ensure_player_turn()?;

        if self.chips < self.bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.chips -= self.bet;
        self.bet *= 2;

        let card = self.shoe.draw();
        self.player_hand.add_card(card);

        if self.player_hand.status() == HandStatus::Bust {
            self.settle(RoundOutcome::Bust);
        } else {
            self.start_dealer_turn();
        }

        Ok(self.view())
    }
}
