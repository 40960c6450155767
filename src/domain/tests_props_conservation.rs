//! Property tests for the card-conservation invariant.
//!
//! At every reachable state the 52 card identities are partitioned across
//! deck, floor, both hands and both piles: none lost, none duplicated.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::room::{PlayerSeat, Room};
use crate::domain::{Card, Rank};

fn assert_conservation(room: &Room) {
    let mut all: Vec<Card> = Vec::new();
    all.extend_from_slice(room.deck.cards());
    all.extend(room.floor.iter().copied());
    for hand in &room.hands {
        all.extend(hand.iter().copied());
    }
    for pile in &room.captured {
        all.extend(pile.iter().copied());
    }

    assert_eq!(all.len(), 52, "cards lost or invented");
    let distinct: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(distinct.len(), 52, "a card exists in two places");
}

fn fresh_room(seed: u64) -> Room {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut room = Room::new("PROP01", &mut rng);
    room.occupy(PlayerSeat::default()).unwrap();
    room.occupy(PlayerSeat::default()).unwrap();
    room
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn conservation_holds_through_any_playout(
        seed in any::<u64>(),
        picks in proptest::collection::vec(any::<u8>(), 0..120),
    ) {
        let mut room = fresh_room(seed);
        assert_conservation(&room);

        let mut picks = picks.into_iter();
        let mut steps = 0;
        while !room.game_over {
            steps += 1;
            prop_assert!(steps < 200, "playout did not terminate");

            let slot = room.turn;
            let hand = &room.hands[slot.index()];
            let pick = picks.next().unwrap_or(0) as usize % hand.len();
            let card = hand[pick];
            room.play_card(slot, card).unwrap();
            assert_conservation(&room);

            // Turn flips unconditionally on every accepted play.
            prop_assert_eq!(room.turn, slot.opponent());
        }

        prop_assert!(room.final_result.is_some());
    }

    #[test]
    fn opening_floor_is_jack_free_for_any_shuffle(seed in any::<u64>()) {
        let room = fresh_room(seed);
        prop_assert_eq!(room.floor.len(), 4);
        prop_assert!(room.floor.iter().all(|c| c.rank != Rank::Jack));
    }
}
