//! Room registry: the keyed store of live rooms.
//!
//! Rooms are owned here and nowhere else; every room sits behind its own
//! mutex, so operations on different rooms run in parallel while events for
//! the same room are applied one at a time. Each mutating operation computes
//! the sanitized views for both bound slots from the same post-mutation state
//! before the lock is released; delivery happens afterwards, fire-and-forget.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;

use crate::domain::player_view::StateView;
use crate::domain::room::{PlayerSeat, Room, Slot};
use crate::domain::Card;
use crate::errors::domain::DomainError;
use crate::notify::MatchFinished;
use crate::utils::room_code::{generate_room_code, normalize_room_id};

/// Views to deliver, one per currently-bound slot.
pub type Deliveries = Vec<(Slot, StateView)>;

#[derive(Debug, Clone)]
pub struct JoinReport {
    pub room_id: String,
    pub slot: Slot,
    pub views: Deliveries,
}

#[derive(Debug, Clone)]
pub struct PlayReport {
    pub views: Deliveries,
    /// Present exactly once per room, on the play that ended the match.
    pub finished: Option<MatchFinished>,
}

#[derive(Debug, Clone)]
pub struct LeaveReport {
    pub destroyed: bool,
    pub views: Deliveries,
}

#[derive(Default)]
pub struct RoomRegistry {
    rooms: DashMap<String, Arc<Mutex<Room>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Create a room under a fresh code with the creator in slot 1.
    pub fn create(&self, seat: PlayerSeat) -> JoinReport {
        loop {
            let id = generate_room_code();
            let entry = self.rooms.entry(id.clone());
            if let Entry::Vacant(vacant) = entry {
                let room = Arc::new(Mutex::new(Room::new(id.clone(), &mut rand::rng())));
                vacant.insert(room.clone());

                let mut room = room.lock();
                let slot = room
                    .occupy(seat)
                    .expect("fresh room must have a free slot");
                return JoinReport {
                    room_id: id,
                    slot,
                    views: Self::views(&room),
                };
            }
            // Code collision: roll again.
        }
    }

    /// Join a room by id. An unknown id is not an error: the room is created
    /// implicitly, so a shared external group key can double as a room key.
    pub fn join(&self, room_id: &str, seat: PlayerSeat) -> Result<JoinReport, DomainError> {
        let id = normalize_room_id(room_id);
        let room = self
            .rooms
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(Room::new(id.clone(), &mut rand::rng()))))
            .clone();

        let mut room = room.lock();
        let slot = room.occupy(seat)?;
        Ok(JoinReport {
            room_id: id,
            slot,
            views: Self::views(&room),
        })
    }

    /// Apply a play for the given slot. Unparseable card ids behave exactly
    /// like cards that are not in the hand.
    pub fn play(&self, room_id: &str, slot: Slot, card_id: &str) -> Result<PlayReport, DomainError> {
        let id = normalize_room_id(room_id);
        let room = self
            .rooms
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(DomainError::RoomNotFound)?;

        let card: Card = card_id.parse().map_err(|_| DomainError::CardNotInHand)?;

        let mut room = room.lock();
        let outcome = room.play_card(slot, card)?;

        let finished = if outcome.game_over && room.claim_result_notification() {
            Some(MatchFinished {
                room_id: room.id.clone(),
                display_names: [
                    room.seats[0].as_ref().and_then(|s| s.display_name.clone()),
                    room.seats[1].as_ref().and_then(|s| s.display_name.clone()),
                ],
                external_ids: [
                    room.seats[0].as_ref().and_then(|s| s.external_id.clone()),
                    room.seats[1].as_ref().and_then(|s| s.external_id.clone()),
                ],
                result: room
                    .final_result
                    .clone()
                    .expect("finished room must carry a result"),
            })
        } else {
            None
        };

        Ok(PlayReport {
            views: Self::views(&room),
            finished,
        })
    }

    /// Free a slot; destroy the room when it empties out. The remaining
    /// occupant, if any, gets a fresh view.
    pub fn leave(&self, room_id: &str, slot: Slot) -> LeaveReport {
        let id = normalize_room_id(room_id);
        let Some(room) = self.rooms.get(&id).map(|entry| entry.value().clone()) else {
            return LeaveReport {
                destroyed: false,
                views: Vec::new(),
            };
        };

        let mut room = room.lock();
        room.vacate(slot);
        if room.is_unoccupied() {
            drop(room);
            self.rooms.remove(&id);
            return LeaveReport {
                destroyed: true,
                views: Vec::new(),
            };
        }

        LeaveReport {
            destroyed: false,
            views: Self::views(&room),
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    #[cfg(test)]
    fn snapshot(&self, room_id: &str) -> Deliveries {
        let id = normalize_room_id(room_id);
        match self.rooms.get(&id) {
            Some(entry) => Self::views(&entry.value().lock()),
            None => Vec::new(),
        }
    }

    fn views(room: &Room) -> Deliveries {
        Slot::BOTH
            .into_iter()
            .filter(|slot| room.seats[slot.index()].is_some())
            .map(|slot| (slot, StateView::for_slot(room, slot)))
            .collect()
    }
}
