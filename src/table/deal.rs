use crate::error::DealError;
use crate::hand::HandStatus;

use super::{Table, TablePhase, TableView};

impl Table {
    /// Stakes the current bet and deals a new round.
    ///
    /// Cards come off the shoe player, player, dealer, dealer. A natural 21
    /// goes straight to the dealer's turn without waiting for a stand.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not awaiting a deal or the bet exceeds
    /// the chip balance. Nothing changes on error.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DealError, Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default().with_starting_chips(5), 1);
    /// assert_eq!(
    ///     table.place_bet_and_deal().unwrap_err(),
    ///     DealError::InsufficientFunds
    /// );
    /// assert_eq!(table.chips(), 5);
    /// ```
    pub fn place_bet_and_deal(&mut self) -> Result<TableView, DealError> {
        if self.phase != TablePhase::AwaitingDeal {
            return Err(DealError::InvalidState);
        }

        if self.chips < self.bet {
            return Err(DealError::InsufficientFunds);
        }

        self.chips -= self.bet;
        self.result = None;
        self.player_hand.clear();
        self.dealer_hand.clear();

        for _ in 0..2 {
            let card = self.shoe.draw();
            self.player_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.shoe.draw();
            self.dealer_hand.add_card(card);
        }

        log::debug!(
            "dealt round: bet {}, player {}, dealer shows {}",
            self.bet,
            self.player_hand.value(),
            self.dealer_hand.visible_value()
        );

        if self.player_hand.status() == HandStatus::Blackjack {
            log::debug!("player natural; dealer plays immediately");
            self.start_dealer_turn();
        } else {
            self.phase = TablePhase::PlayerTurn;
        }

        Ok(self.view())
    }
}
