//! Dealing: opening floor and alternating hand refills.

use rand::Rng;

use super::cards_types::{Card, Rank};
use super::deck::Deck;
use super::rules::{HAND_SIZE, OPENING_FLOOR_SIZE};

/// Draw until the floor holds four cards or the deck runs out. A drawn Jack is
/// never placed on the floor; it goes back into the deck at a uniformly random
/// position and drawing continues, so the opening floor is always Jack-free.
pub fn deal_floor<R: Rng>(rng: &mut R, deck: &mut Deck, floor: &mut Vec<Card>) {
    while floor.len() < OPENING_FLOOR_SIZE {
        let Some(card) = deck.draw() else { break };
        if card.rank == Rank::Jack {
            deck.reinsert_random(rng, card);
        } else {
            floor.push(card);
        }
    }
}

/// Deal up to four cards to each hand, strictly alternating first/second and
/// stopping the instant the deck empties (the second hand may come up one card
/// short). Returns whether any card was dealt.
pub fn deal_hands(deck: &mut Deck, first: &mut Vec<Card>, second: &mut Vec<Card>) -> bool {
    if deck.is_empty() {
        return false;
    }
    for _ in 0..HAND_SIZE {
        if let Some(card) = deck.draw() {
            first.push(card);
        }
        if let Some(card) = deck.draw() {
            second.push(card);
        }
    }
    true
}
