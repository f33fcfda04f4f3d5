//! Round outcome types.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player went over 21.
    Bust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer finished closer to 21.
    DealerWin,
    /// Player finished closer to 21.
    PlayerWin,
    /// Equal totals; the stake is returned.
    Push,
}

impl RoundOutcome {
    /// Returns the message shown at the table once the round is over.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Bust => "BUST! YOU LOSE",
            Self::DealerBust => "DEALER BUSTS! YOU WIN!",
            Self::DealerWin => "DEALER WINS",
            Self::PlayerWin => "YOU WIN!",
            Self::Push => "PUSH - BET RETURNED",
        }
    }

    /// Returns the amount credited back for a round staked at `bet`.
    ///
    /// Every win pays even money, a natural included.
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::Bust | Self::DealerWin => 0,
            Self::DealerBust | Self::PlayerWin => bet * 2,
            Self::Push => bet,
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The total stake, including a double.
    pub bet: usize,
    /// The payout amount (added to the chip balance).
    pub payout: usize,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
}

impl RoundResult {
    /// Net result (positive = profit, negative = loss).
    #[expect(clippy::cast_possible_wrap, reason = "chip values fit in isize")]
    #[must_use]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}
