//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when placing a bet and dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress or has not been cleared.
    #[error("invalid table state for dealing")]
    InvalidState,
    /// The bet exceeds the chip balance.
    #[error("NOT ENOUGH CHIPS!")]
    InsufficientFunds,
}

/// Errors that can occur when changing the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets can only change between rounds.
    #[error("invalid table state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Not the player's turn.
    #[error("invalid table state for this action")]
    InvalidState,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The dealer is not playing.
    #[error("invalid table state for the dealer")]
    InvalidState,
}

/// Errors that can occur at round and session boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LeaveError {
    /// A hand is still being played.
    #[error("cannot leave the table mid-hand")]
    RoundInProgress,
}

/// Errors returned by [`Table::execute`](crate::Table::execute).
///
/// Collapses the per-operation errors into the two kinds a presentation
/// layer needs to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The bet or double exceeds the chip balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The command is not legal in the current phase.
    #[error("command not allowed in the current phase")]
    InvalidCommand,
}

impl From<DealError> for CommandError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::InvalidState => Self::InvalidCommand,
            DealError::InsufficientFunds => Self::InsufficientFunds,
        }
    }
}

impl From<ActionError> for CommandError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::InvalidState => Self::InvalidCommand,
            ActionError::InsufficientFunds => Self::InsufficientFunds,
        }
    }
}
