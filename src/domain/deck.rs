//! The draw pile: a shuffled 52-card sequence consumed from one end.

use rand::Rng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::DECK_SIZE;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 rank×suit combinations, shuffled with an unbiased Fisher-Yates
    /// pass over the given RNG. Shuffling is generic over `Rng` so tests can
    /// deal deterministically from a seeded generator.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }
        Self { cards }
    }

    /// Build a deck with a fixed draw order. `draw` returns the last card
    /// first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return one card from the draw end. `None` signals an empty
    /// deck; callers decide whether that ends a deal or the match.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Put a card back at a uniformly random position among the remaining
    /// cards (used to keep Jacks off the opening floor).
    pub fn reinsert_random<R: Rng>(&mut self, rng: &mut R, card: Card) {
        let idx = rng.random_range(0..=self.cards.len());
        self.cards.insert(idx, card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
