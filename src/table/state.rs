//! Table phase types.

/// Phase of the current round.
///
/// The table moves `AwaitingDeal -> PlayerTurn -> DealerTurn -> RoundOver`
/// and back to `AwaitingDeal` once the round is cleared. A bust skips
/// `DealerTurn`, and a natural on the deal skips `PlayerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TablePhase {
    /// Waiting for the player to place a bet and deal.
    #[default]
    AwaitingDeal,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand, one step at a time.
    DealerTurn,
    /// Round has been settled; hands stay on the table until cleared.
    RoundOver,
}

/// A command the presentation layer can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCommand {
    /// Place the current bet and deal a new round.
    Deal,
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, draw exactly one card, then stand.
    DoubleDown,
}
