//! Round engine and session state.

use crate::error::{BetError, CommandError, LeaveError};
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;
pub mod view;

pub use dealer::{DealerPlay, DealerStep};
pub use state::{TableCommand, TablePhase};
pub use view::{CardFace, TableView};

/// A single-seat blackjack table.
///
/// The table owns the shoe, the chip balance, the bet, and both hands. Every
/// command checks the current [`TablePhase`] and leaves the table untouched
/// when it is rejected.
#[derive(Debug, Clone)]
pub struct Table {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Table options.
    pub options: TableOptions,
    /// Current phase.
    phase: TablePhase,
    /// Chip balance, excluding the stake on the table.
    chips: usize,
    /// Stake for the current or next round.
    bet: usize,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Result of the last settled round, kept until the round is cleared.
    result: Option<RoundResult>,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions, TablePhase};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.phase(), TablePhase::AwaitingDeal);
    /// assert_eq!(table.chips(), 100);
    /// assert_eq!(table.bet(), 10);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let shoe = Shoe::new(seed).with_threshold(options.reshuffle_threshold);

        Self {
            shoe,
            phase: TablePhase::AwaitingDeal,
            chips: options.starting_chips,
            bet: options.default_bet,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            result: None,
            options,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> TablePhase {
        self.phase
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the result of the settled round, if the table is in
    /// [`TablePhase::RoundOver`].
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns whether a double down would currently be accepted.
    #[must_use]
    pub const fn can_double(&self) -> bool {
        matches!(self.phase, TablePhase::PlayerTurn) && self.chips >= self.bet
    }

    /// Changes the bet for the next round.
    ///
    /// The balance is checked when the round is dealt, not here.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is on the table or the amount is zero.
    pub fn set_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.phase != TablePhase::AwaitingDeal {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        self.bet = amount;
        Ok(())
    }

    /// Clears a settled round and returns to [`TablePhase::AwaitingDeal`].
    ///
    /// Does nothing if no round is on the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled yet.
    pub fn clear_round(&mut self) -> Result<(), LeaveError> {
        match self.phase {
            TablePhase::PlayerTurn | TablePhase::DealerTurn => Err(LeaveError::RoundInProgress),
            TablePhase::AwaitingDeal => Ok(()),
            TablePhase::RoundOver => {
                self.player_hand.clear();
                self.dealer_hand.clear();
                self.result = None;
                self.phase = TablePhase::AwaitingDeal;
                Ok(())
            }
        }
    }

    /// Leaves the table, topping a broke player back up to the starting stake.
    ///
    /// A settled round still on the table is cleared first.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is still being played.
    pub fn leave_table(&mut self) -> Result<(), LeaveError> {
        self.clear_round()?;

        if self.chips == 0 {
            log::debug!(
                "player left broke; restoring {} chips",
                self.options.starting_chips
            );
            self.chips = self.options.starting_chips;
            self.bet = self.options.default_bet;
        }

        Ok(())
    }

    /// Starts a new session: starting stake, default bet, and a fresh shoe.
    ///
    /// Any round in progress is abandoned and its stake is lost.
    pub fn reset_session(&mut self) {
        log::debug!("resetting session");
        self.shoe.reset();
        self.chips = self.options.starting_chips;
        self.bet = self.options.default_bet;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.result = None;
        self.phase = TablePhase::AwaitingDeal;
    }

    /// Runs a presentation-layer command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidCommand`] if the command is not legal in
    /// the current phase and [`CommandError::InsufficientFunds`] if the bet or
    /// double cannot be covered.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{CommandError, Table, TableCommand, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default(), 7);
    /// assert_eq!(
    ///     table.execute(TableCommand::Hit).unwrap_err(),
    ///     CommandError::InvalidCommand
    /// );
    /// assert!(table.execute(TableCommand::Deal).is_ok());
    /// ```
    pub fn execute(&mut self, command: TableCommand) -> Result<TableView, CommandError> {
        let view = match command {
            TableCommand::Deal => self.place_bet_and_deal()?,
            TableCommand::Hit => self.hit()?,
            TableCommand::Stand => self.stand()?,
            TableCommand::DoubleDown => self.double_down()?,
        };
        Ok(view)
    }
}
