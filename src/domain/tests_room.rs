//! Room state machine tests: lifecycle, turn order, captures, end of game.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::deck::Deck;
use crate::domain::player_view::StateView;
use crate::domain::room::{PlayerSeat, Room, Slot};
use crate::domain::{Card, Rank};
use crate::errors::domain::DomainError;

fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| t.parse().unwrap()).collect()
}

fn seat(name: &str) -> PlayerSeat {
    PlayerSeat {
        display_name: Some(name.to_string()),
        external_id: None,
    }
}

fn active_room(rng_seed: u64) -> Room {
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let mut room = Room::new("TEST01", &mut rng);
    assert_eq!(room.occupy(seat("a")).unwrap(), Slot::P1);
    assert_eq!(room.occupy(seat("b")).unwrap(), Slot::P2);
    assert!(room.started);
    room
}

/// Play greedily (always the first card of the turn holder's hand) until the
/// match ends.
fn play_out(room: &mut Room) {
    let mut guard = 0;
    while !room.game_over {
        guard += 1;
        assert!(guard < 200, "playout did not terminate");
        let slot = room.turn;
        let card = room.hands[slot.index()][0];
        room.play_card(slot, card).unwrap();
    }
}

#[test]
fn initial_deal_shape() {
    let room = active_room(3);
    assert_eq!(room.floor.len(), 4);
    assert_eq!(room.hands[0].len(), 4);
    assert_eq!(room.hands[1].len(), 4);
    assert_eq!(room.deck.len(), 40);
    assert_eq!(room.turn, Slot::P1);
    assert!(room.floor.iter().all(|c| c.rank != Rank::Jack));
}

#[test]
fn third_occupant_is_rejected() {
    let mut room = active_room(4);
    assert_eq!(room.occupy(seat("c")), Err(DomainError::RoomFull));
}

#[test]
fn vacated_slot_is_claimable_and_pauses_the_match() {
    let mut room = active_room(5);
    room.vacate(Slot::P1);
    assert!(!room.started);
    assert!(!room.is_unoccupied());

    // No identity check: anyone may take the freed slot, and play resumes.
    assert_eq!(room.occupy(seat("someone-else")).unwrap(), Slot::P1);
    assert!(room.started);

    room.vacate(Slot::P1);
    room.vacate(Slot::P2);
    assert!(room.is_unoccupied());
}

#[test]
fn play_requires_both_players() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut room = Room::new("TEST02", &mut rng);
    room.occupy(seat("a")).unwrap();
    let card = room.hands[0][0];
    assert_eq!(
        room.play_card(Slot::P1, card),
        Err(DomainError::MatchNotStarted)
    );
}

#[test]
fn play_rejects_out_of_turn_and_unknown_card() {
    let mut room = active_room(7);

    let p2_card = room.hands[1][0];
    assert_eq!(
        room.play_card(Slot::P2, p2_card),
        Err(DomainError::NotYourTurn)
    );

    // A card the player does not hold, even a real one from the opponent.
    assert_eq!(
        room.play_card(Slot::P1, p2_card),
        Err(DomainError::CardNotInHand)
    );

    // Rejections leave the room untouched.
    assert_eq!(room.hands[0].len(), 4);
    assert_eq!(room.hands[1].len(), 4);
    assert_eq!(room.turn, Slot::P1);
}

#[test]
fn turn_flips_on_every_accepted_play() {
    let mut room = active_room(8);
    for _ in 0..4 {
        let slot = room.turn;
        let card = room.hands[slot.index()][0];
        room.play_card(slot, card).unwrap();
        assert_eq!(room.turn, slot.opponent());
    }
}

#[test]
fn capture_moves_cards_to_pile_with_played_card_first() {
    let mut room = active_room(9);
    room.floor = cards(&["4♠", "7♥"]);
    room.hands = [cards(&["7♣", "2♦"]), cards(&["9♠", "3♥"])];

    let outcome = room.play_card(Slot::P1, "7♣".parse().unwrap()).unwrap();
    assert_eq!(outcome.captured, cards(&["4♠"]));
    assert!(!outcome.sur);
    assert_eq!(room.captured[0], cards(&["7♣", "4♠"]));
    assert_eq!(room.floor, cards(&["7♥"]));
    assert_eq!(room.last_captured_by, Some(Slot::P1));
}

#[test]
fn failed_capture_drops_card_on_floor() {
    let mut room = active_room(10);
    room.floor = cards(&["9♠"]);
    room.hands = [cards(&["5♦", "2♦"]), cards(&["3♥", "4♥"])];

    let outcome = room.play_card(Slot::P1, "5♦".parse().unwrap()).unwrap();
    assert!(outcome.captured.is_empty());
    assert_eq!(room.floor, cards(&["9♠", "5♦"]));
    assert!(room.captured[0].is_empty());
    assert_eq!(room.last_captured_by, None);
}

#[test]
fn clearing_the_floor_earns_a_sur() {
    let mut room = active_room(11);
    room.floor = cards(&["3♦"]);
    room.hands = [cards(&["8♣", "2♦"]), cards(&["9♠", "4♥"])];

    let outcome = room.play_card(Slot::P1, "8♣".parse().unwrap()).unwrap();
    assert!(outcome.sur);
    assert_eq!(room.surs[0], 1);
    assert!(room.floor.is_empty());
}

#[test]
fn jack_sweep_is_not_a_sur() {
    let mut room = active_room(12);
    room.floor = cards(&["5♦", "9♣"]);
    room.hands = [cards(&["J♠", "2♦"]), cards(&["9♠", "4♥"])];

    let outcome = room.play_card(Slot::P1, "J♠".parse().unwrap()).unwrap();
    assert_eq!(outcome.captured, cards(&["5♦", "9♣"]));
    assert!(room.floor.is_empty());
    assert!(!outcome.sur);
    assert_eq!(room.surs[0], 0);
    assert_eq!(room.last_captured_by, Some(Slot::P1));
}

#[test]
fn empty_hands_trigger_redeal_without_touching_turn() {
    let mut room = active_room(13);
    room.floor = cards(&["9♠"]);
    room.hands = [cards(&["5♦"]), cards(&["4♥"])];

    room.play_card(Slot::P1, "5♦".parse().unwrap()).unwrap();
    let outcome = room.play_card(Slot::P2, "4♥".parse().unwrap()).unwrap();
    assert!(!outcome.game_over);

    // Both hands were empty, so a fresh round of four was dealt; the turn
    // indicator is whatever the normal flip produced.
    assert_eq!(room.hands[0].len(), 4);
    assert_eq!(room.hands[1].len(), 4);
    assert_eq!(room.turn, Slot::P1);
}

#[test]
fn exhausted_deck_and_hands_end_the_match() {
    let mut room = active_room(14);
    room.deck = Deck::from_cards(Vec::new());
    room.floor = cards(&["9♠", "6♣"]);
    room.hands = [cards(&["5♦"]), cards(&["5♥"])];
    room.captured = [cards(&["A♠"]), Vec::new()];
    room.last_captured_by = Some(Slot::P1);

    room.play_card(Slot::P1, "5♦".parse().unwrap()).unwrap();
    let outcome = room.play_card(Slot::P2, "5♥".parse().unwrap()).unwrap();
    assert!(outcome.game_over);
    assert!(room.game_over);

    // Leftover floor cards went to the most recent capturer.
    assert!(room.floor.is_empty());
    assert!(room.captured[0].contains(&"9♠".parse().unwrap()));
    assert!(room.final_result.is_some());
}

#[test]
fn leftover_floor_stays_put_when_nobody_captured() {
    let mut room = active_room(15);
    room.deck = Deck::from_cards(Vec::new());
    room.floor = cards(&["9♠"]);
    room.hands = [cards(&["2♦"]), cards(&["3♥"])];

    room.play_card(Slot::P1, "2♦".parse().unwrap()).unwrap();
    room.play_card(Slot::P2, "3♥".parse().unwrap()).unwrap();
    assert!(room.game_over);
    assert_eq!(room.last_captured_by, None);
    // 9♠, 2♦ and 3♥ remain on the floor; neither pile grew.
    assert_eq!(room.floor.len(), 3);
    assert!(room.captured.iter().all(Vec::is_empty));
}

#[test]
fn finished_match_rejects_play_and_keeps_result_stable() {
    let mut room = active_room(16);
    play_out(&mut room);

    let frozen = room.final_result.clone().unwrap();
    let hands_before = room.hands.clone();

    let any_card: Card = "A♠".parse().unwrap();
    assert_eq!(room.play_card(Slot::P1, any_card), Err(DomainError::MatchOver));
    assert_eq!(room.final_result.as_ref(), Some(&frozen));
    assert_eq!(room.hands, hands_before);
}

#[test]
fn result_notification_is_claimed_exactly_once() {
    let mut room = active_room(17);
    assert!(!room.claim_result_notification());

    play_out(&mut room);
    assert!(room.claim_result_notification());
    assert!(!room.claim_result_notification());
}

#[test]
fn full_playout_scores_both_piles() {
    let mut room = active_room(18);
    play_out(&mut room);

    let result = room.final_result.as_ref().unwrap();
    let counted: usize = room.captured.iter().map(Vec::len).sum::<usize>() + room.floor.len();
    assert_eq!(counted, 52);
    assert_eq!(
        result.p1.clubs + result.p2.clubs,
        (13 - room
            .floor
            .iter()
            .filter(|c| c.suit == crate::domain::Suit::Clubs)
            .count()) as u16
    );
}

#[test]
fn views_are_asymmetric() {
    let room = active_room(19);
    let v1 = StateView::for_slot(&room, Slot::P1);
    let v2 = StateView::for_slot(&room, Slot::P2);

    assert_eq!(v1.me.hand, room.hands[0]);
    assert_eq!(v1.opp.hand_count, room.hands[1].len());
    assert_eq!(v2.me.hand, room.hands[1]);
    assert_eq!(v2.opp.hand_count, room.hands[0].len());

    // Serialized form of one player's view must not leak the other's card ids.
    let json = serde_json::to_string(&v1).unwrap();
    for card in &room.hands[1] {
        let token = format!("\"{card}\"");
        assert!(!json.contains(&token), "p2 card {card} leaked into p1 view");
    }
}

#[test]
fn view_carries_final_result_only_after_game_over() {
    let mut room = active_room(20);
    assert!(StateView::for_slot(&room, Slot::P1).final_result.is_none());

    play_out(&mut room);
    let view = StateView::for_slot(&room, Slot::P1);
    assert!(view.game_over);
    assert_eq!(view.final_result, room.final_result);
}
