//! A single-seat blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that owns the shoe, the chip balance,
//! and both hands, and drives a round from the deal through the player's
//! turn and a step-by-step dealer turn to the payout.
//!
//! # Example
//!
//! ```
//! use bjtable::{Table, TableOptions, TablePhase};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.place_bet_and_deal().unwrap();
//!
//! if table.phase() == TablePhase::PlayerTurn {
//!     table.stand().unwrap();
//! }
//! for view in table.dealer_play() {
//!     // render `view`, then wait `dealer_step_delay`
//!     let _ = view;
//! }
//!
//! assert_eq!(table.phase(), TablePhase::RoundOver);
//! assert!(table.view().outcome_message().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, CommandError, DealError, DealerError, LeaveError};
pub use hand::{DealerHand, Hand, HandStatus, hand_total, is_soft};
pub use options::TableOptions;
pub use result::{RoundOutcome, RoundResult};
pub use shoe::{RESHUFFLE_THRESHOLD, Shoe};
pub use table::{
    CardFace, DealerPlay, DealerStep, Table, TableCommand, TablePhase, TableView,
};
