//! Table configuration options.

use core::time::Duration;

use crate::shoe::RESHUFFLE_THRESHOLD;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(250)
///     .with_default_bet(25);
/// assert_eq!(options.starting_chips, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips a session starts with, and is topped back up to when broke.
    pub starting_chips: usize,
    /// Bet placed at the start of every round.
    pub default_bet: usize,
    /// Remaining-card count below which the shoe reshuffles before a draw.
    pub reshuffle_threshold: usize,
    /// Dealer total at which the dealer stops drawing, soft or hard.
    pub dealer_stands_on: u8,
    /// Pause the presentation layer should leave between dealer steps.
    ///
    /// The engine never sleeps; this is advice for whoever drives
    /// [`Table::dealer_step`](crate::Table::dealer_step).
    pub dealer_step_delay: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            default_bet: 10,
            reshuffle_threshold: RESHUFFLE_THRESHOLD,
            dealer_stands_on: 17,
            dealer_step_delay: Duration::from_millis(500),
        }
    }
}

impl TableOptions {
    /// Sets the starting stake.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(5);
    /// assert_eq!(options.starting_chips, 5);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the default bet.
    #[must_use]
    pub const fn with_default_bet(mut self, bet: usize) -> Self {
        self.default_bet = bet;
        self
    }

    /// Sets the shoe's reshuffle threshold.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the advised pause between dealer steps.
    #[must_use]
    pub const fn with_dealer_step_delay(mut self, delay: Duration) -> Self {
        self.dealer_step_delay = delay;
        self
    }
}
