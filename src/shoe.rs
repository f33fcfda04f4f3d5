//! The shoe cards are dealt from.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Remaining-card count below which the shoe reshuffles before a draw.
pub const RESHUFFLE_THRESHOLD: usize = 10;

/// A single-deck shoe that reshuffles itself before it can run dry.
///
/// The top of the shoe is the end of the card sequence.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    threshold: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut shoe = Self::from_order(Vec::new(), seed);
        shoe.reset();
        shoe
    }

    /// Creates a shoe holding `cards` in the given order, bottom first.
    ///
    /// Nothing is shuffled until the shoe runs low, at which point the seed
    /// drives the reshuffle.
    #[must_use]
    pub fn from_order(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            threshold: RESHUFFLE_THRESHOLD,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sets the reshuffle threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the reshuffle threshold.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Refills the shoe with one of every card and shuffles it.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.cards.push(Card::new(suit, rank));
            }
        }

        // Fisher-Yates, walking down from the last index.
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws the top card, reshuffling a full deck first if the shoe is low.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a freshly reset shoe always holds a full deck"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.len() < self.threshold || self.cards.is_empty() {
            log::debug!(
                "reshuffling shoe with {} cards remaining",
                self.cards.len()
            );
            self.reset();
        }

        self.cards
            .pop()
            .expect("shoe holds a full deck after reshuffling")
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
