use actix::prelude::*;
use dashmap::DashMap;

use crate::domain::player_view::StateView;
use crate::domain::room::Slot;

#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct StatePush(pub StateView);

/// Maps each occupied seat to the live session bound to it. A seat holds at
/// most one session; rebinding replaces the previous recipient.
#[derive(Default)]
pub struct SessionHub {
    seats: DashMap<(String, Slot), Recipient<StatePush>>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self {
            seats: DashMap::new(),
        }
    }

    pub fn register(&self, room_id: String, slot: Slot, recipient: Recipient<StatePush>) {
        self.seats.insert((room_id, slot), recipient);
    }

    pub fn unregister(&self, room_id: &str, slot: Slot) {
        self.seats.remove(&(room_id.to_string(), slot));
    }

    /// Fire-and-forget delivery; seats without a live session are skipped.
    pub fn deliver(&self, room_id: &str, views: Vec<(Slot, StateView)>) {
        for (slot, view) in views {
            if let Some(recipient) = self.seats.get(&(room_id.to_string(), slot)) {
                recipient.do_send(StatePush(view));
            }
        }
    }
}
