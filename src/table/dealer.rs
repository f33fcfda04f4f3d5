use crate::card::Card;
use crate::error::DealerError;
use crate::hand::{BLACKJACK, HandStatus};
use crate::result::{RoundOutcome, RoundResult};

use super::{Table, TablePhase, TableView};

/// One step of the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card and may draw again.
    Drew(Card),
    /// The dealer stood and the round was settled.
    Settled(RoundResult),
}

/// Compares final totals once the dealer has stopped drawing.
const fn compare_totals(player_value: u8, dealer_value: u8) -> RoundOutcome {
    if dealer_value > BLACKJACK {
        RoundOutcome::DealerBust
    } else if dealer_value > player_value {
        RoundOutcome::DealerWin
    } else if player_value > dealer_value {
        RoundOutcome::PlayerWin
    } else {
        RoundOutcome::Push
    }
}

impl Table {
    /// Ends the player's turn and reveals the dealer's hole card.
    pub(super) fn start_dealer_turn(&mut self) {
        if self.player_hand.status() == HandStatus::Active {
            self.player_hand.set_status(HandStatus::Stand);
        }
        self.dealer_hand.reveal_hole();
        self.phase = TablePhase::DealerTurn;
    }

    /// Pays out `outcome`, resets the bet, and ends the round.
    pub(super) fn settle(&mut self, outcome: RoundOutcome) -> RoundResult {
        self.dealer_hand.reveal_hole();

        let payout = outcome.payout(self.bet);
        self.chips += payout;

        let result = RoundResult {
            outcome,
            bet: self.bet,
            payout,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
        };

        log::debug!(
            "round settled: {outcome:?} (player {}, dealer {}), paid {payout}, chips {}",
            result.player_value,
            result.dealer_value,
            self.chips
        );

        self.bet = self.options.default_bet;
        self.result = Some(result);
        self.phase = TablePhase::RoundOver;

        result
    }

    /// Plays one step of the dealer's turn.
    ///
    /// Below [`dealer_stands_on`](crate::TableOptions::dealer_stands_on) the
    /// dealer draws one card. Otherwise the dealer stands, soft or hard, and
    /// the round is settled. Callers are expected to leave
    /// [`dealer_step_delay`](crate::TableOptions::dealer_step_delay) between
    /// steps so each draw can be shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the dealer's turn.
    pub fn dealer_step(&mut self) -> Result<DealerStep, DealerError> {
        if self.phase != TablePhase::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        if self.dealer_hand.value() < self.options.dealer_stands_on {
            let card = self.shoe.draw();
            self.dealer_hand.add_card(card);
            log::trace!("dealer draws {card}, total {}", self.dealer_hand.value());
            return Ok(DealerStep::Drew(card));
        }

        let outcome = compare_totals(self.player_hand.value(), self.dealer_hand.value());
        Ok(DealerStep::Settled(self.settle(outcome)))
    }

    /// Returns an iterator over the dealer's turn, yielding a snapshot after
    /// every step.
    ///
    /// The last snapshot is the settled table. Dropping the iterator early
    /// pauses the dealer; a later call picks up where it stopped.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions, TablePhase};
    ///
    /// let mut table = Table::new(TableOptions::default(), 3);
    /// table.place_bet_and_deal().unwrap();
    /// if table.phase() == TablePhase::PlayerTurn {
    ///     table.stand().unwrap();
    /// }
    ///
    /// let last = table.dealer_play().last();
    /// assert_eq!(last.map(|view| view.phase), Some(TablePhase::RoundOver));
    /// ```
    pub const fn dealer_play(&mut self) -> DealerPlay<'_> {
        DealerPlay { table: self }
    }

    /// Runs the dealer's turn to the end and returns the settled result.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the dealer's turn.
    pub fn finish_dealer_turn(&mut self) -> Result<RoundResult, DealerError> {
        loop {
            if let DealerStep::Settled(result) = self.dealer_step()? {
                return Ok(result);
            }
        }
    }
}

/// Iterator over the dealer's turn, returned by [`Table::dealer_play`].
#[derive(Debug)]
pub struct DealerPlay<'a> {
    table: &'a mut Table,
}

impl Iterator for DealerPlay<'_> {
    type Item = TableView;

    fn next(&mut self) -> Option<Self::Item> {
        self.table.dealer_step().ok()?;
        Some(self.table.view())
    }
}
