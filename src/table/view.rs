//! Snapshots of the table for the presentation layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::RoundOutcome;

use super::{Table, TablePhase};

/// A card as the player sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// The card is face up.
    Up(Card),
    /// The card is face down.
    Down,
}

impl CardFace {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Up(card) => Some(*card),
            Self::Down => None,
        }
    }
}

/// Everything the player is allowed to see at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current phase.
    pub phase: TablePhase,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The dealer's cards; the hole card is face down until the player's
    /// turn ends.
    pub dealer_cards: Vec<CardFace>,
    /// The player's total.
    pub player_total: u8,
    /// The dealer's total, hidden while the hole card is face down.
    pub dealer_total: Option<u8>,
    /// Chip balance.
    pub chips: usize,
    /// Current bet.
    pub bet: usize,
    /// How the round ended, once it is over.
    pub outcome: Option<RoundOutcome>,
}

impl TableView {
    /// Returns the message to show for a settled round.
    #[must_use]
    pub fn outcome_message(&self) -> Option<&'static str> {
        self.outcome.map(RoundOutcome::message)
    }
}

impl Table {
    /// Returns a snapshot of the table.
    #[must_use]
    pub fn view(&self) -> TableView {
        let dealer = &self.dealer_hand;
        let dealer_cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if dealer.is_face_up(index) {
                    CardFace::Up(*card)
                } else {
                    CardFace::Down
                }
            })
            .collect();

        TableView {
            phase: self.phase,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards,
            player_total: self.player_hand.value(),
            dealer_total: dealer.is_hole_revealed().then(|| dealer.value()),
            chips: self.chips,
            bet: self.bet,
            outcome: match self.phase {
                TablePhase::RoundOver => self.result.map(|result| result.outcome),
                _ => None,
            },
        }
    }
}
