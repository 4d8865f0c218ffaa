//! Hand representation and scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// Scores above this value are a bust.
pub const BLACKJACK: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut hard: u16 = 0;
    let mut has_ace = false;

    for card in cards {
        let value = if card.rank.is_ace() {
            has_ace = true;
            1
        } else {
            u16::from(card.numeric_value())
        };
        hard = hard.saturating_add(value);
    }

    // Two aces at 11 already exceed 21, so at most one ace can stay soft.
    if has_ace && hard <= BLACKJACK - 10 {
        (hard + 10, true)
    } else {
        (hard, false)
    }
}

/// The cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the blackjack score of the hand.
    ///
    /// Every ace starts at 11. While the total is over 21 and an ace is still
    /// counted as 11, one such ace is re-counted as 1.
    #[must_use]
    pub fn score(&self) -> u16 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
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

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
