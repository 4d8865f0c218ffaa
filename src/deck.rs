//! Deck construction, shuffling, and dealing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// An ordered sequence of unique cards, dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds the Cartesian product of `suits` × `ranks` in suit-major,
    /// rank-minor order. The deck is not shuffled.
    ///
    /// Repeated suits or ranks are ignored so that no card appears twice.
    #[must_use]
    pub fn new(suits: &[Suit], ranks: &[Rank]) -> Self {
        let mut cards = Vec::with_capacity(suits.len() * ranks.len());

        for &suit in suits {
            for &rank in ranks {
                cards.push(Card::new(suit, rank));
            }
        }

        Self::from_cards(cards)
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Builds an unshuffled standard 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&Suit::ALL, &Rank::ALL)
    }

    /// Builds a deck that deals `cards` in the given order.
    ///
    /// Later duplicates of a card already in the deck are dropped.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut deck = VecDeque::with_capacity(DECK_SIZE);
        for card in cards {
            if !deck.contains(&card) {
                deck.push_back(card);
            }
        }
        Self { cards: deck }
    }

    /// Shuffles the deck in place with a uniform random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop_front().ok_or(EmptyDeckError)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterates over the remaining cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
