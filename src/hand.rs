//! Hand evaluation and the player and dealer hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Returns the blackjack total of `cards`.
///
/// Aces count 11 and drop to 1 one at a time while the hand would bust, so
/// the result is the best total not above 21 when one exists and the all-ones
/// total otherwise.
///
/// ```
/// use bjtable::{Card, Suit, hand_total};
///
/// let hand = [
///     Card::new(Suit::Hearts, 1),
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Clubs, 9),
/// ];
/// assert_eq!(hand_total(&hand), 21);
/// ```
#[must_use]
pub fn hand_total(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` holds an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a blackjack (natural 21).
    Blackjack,
}

/// The player's hand.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = self.value();
        if value > BLACKJACK {
            self.status = HandStatus::Bust;
        } else if self.cards.len() == 2 && value == BLACKJACK {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_total(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Active;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns whether the card at `index` is shown face up.
    ///
    /// Only the second card, the hole card, is ever face down.
    #[must_use]
    pub const fn is_face_up(&self, index: usize) -> bool {
        self.hole_revealed || index != 1
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, Card::value)
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_total(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Spades, r)).collect()
    }

    #[test]
    fn totals_from_known_hands() {
        assert_eq!(hand_total(&cards(&[1, 1, 9])), 21);
        assert_eq!(hand_total(&cards(&[1, 1])), 12);
        assert_eq!(hand_total(&cards(&[13, 12])), 20);
        assert_eq!(hand_total(&cards(&[1, 13])), 21);
        assert_eq!(hand_total(&cards(&[1, 1, 1, 1])), 14);
        assert_eq!(hand_total(&cards(&[10, 10, 5])), 25);
        assert_eq!(hand_total(&cards(&[1, 10, 10, 5])), 26);
        assert_eq!(hand_total(&[]), 0);
    }

    #[test]
    fn soft_hands() {
        assert!(is_soft(&cards(&[1, 6])));
        assert!(!is_soft(&cards(&[1, 6, 10])));
        assert!(is_soft(&cards(&[1, 1])));
        assert!(!is_soft(&cards(&[10, 7])));
    }

    // Brute force over every ace assignment.
    fn best_total(ranks: &[u8]) -> u8 {
        let aces = ranks.iter().filter(|&&r| r == 1).count();
        let hard: u8 = ranks
            .iter()
            .map(|&r| if r == 1 { 1 } else { r.min(10) })
            .sum();
        (0..=aces)
            .map(|high| hard + 10 * high as u8)
            .filter(|&t| t <= BLACKJACK)
            .max()
            .unwrap_or(hard)
    }

    #[test]
    fn total_matches_best_ace_assignment() {
        for a in 1..=13 {
            for b in 1..=13 {
                for c in 1..=13 {
                    let ranks = [a, b, c];
                    assert_eq!(hand_total(&cards(&ranks)), best_total(&ranks), "{ranks:?}");

                    let with_ace = [a, b, c, 1];
                    assert_eq!(
                        hand_total(&cards(&with_ace)),
                        best_total(&with_ace),
                        "{with_ace:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn player_hand_status_tracks_cards() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Suit::Hearts, 1));
        hand.add_card(Card::new(Suit::Clubs, 13));
        assert_eq!(hand.status(), HandStatus::Blackjack);
        assert!(hand.is_blackjack());

        let mut bust = Hand::new();
        for rank in [10, 9, 3] {
            bust.add_card(Card::new(Suit::Diamonds, rank));
        }
        assert_eq!(bust.status(), HandStatus::Bust);
        assert!(bust.is_bust());

        bust.clear();
        assert!(bust.is_empty());
        assert_eq!(bust.status(), HandStatus::Active);
    }

    #[test]
    fn dealer_hole_card_is_concealed_until_revealed() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, 1));
        dealer.add_card(Card::new(Suit::Clubs, 6));

        assert!(dealer.is_face_up(0));
        assert!(!dealer.is_face_up(1));
        assert_eq!(dealer.visible_value(), 11);

        dealer.reveal_hole();
        assert!(dealer.is_face_up(1));
        assert_eq!(dealer.visible_value(), 17);
    }
}
