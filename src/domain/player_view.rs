//! Sanitized per-player views of room state.
//!
//! Both views of a mutation are computed from the same post-mutation state
//! while the room lock is held, and the opponent's hand is reduced to a count
//! before anything leaves the room.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::room::{Room, Slot};
use super::scoring::FinalResult;

/// What the viewer may know about their own seat: full hand contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnSeatView {
    pub key: Slot,
    pub hand: Vec<Card>,
    pub captured_count: usize,
    pub surs: u8,
}

/// What the viewer may know about the opponent: hand size only, never ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentSeatView {
    pub key: Slot,
    pub hand_count: usize,
    pub captured_count: usize,
    pub surs: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    pub room_id: String,
    pub started: bool,
    pub game_over: bool,
    pub turn: Slot,
    pub deck_count: usize,
    pub floor: Vec<Card>,
    pub me: OwnSeatView,
    pub opp: OpponentSeatView,
    #[serde(rename = "final", default, skip_serializing_if = "Option::is_none")]
    pub final_result: Option<FinalResult>,
}

impl StateView {
    pub fn for_slot(room: &Room, viewer: Slot) -> Self {
        let opp = viewer.opponent();
        Self {
            room_id: room.id.clone(),
            started: room.started,
            game_over: room.game_over,
            turn: room.turn,
            deck_count: room.deck.len(),
            floor: room.floor.clone(),
            me: OwnSeatView {
                key: viewer,
                hand: room.hands[viewer.index()].clone(),
                captured_count: room.captured[viewer.index()].len(),
                surs: room.surs[viewer.index()],
            },
            opp: OpponentSeatView {
                key: opp,
                hand_count: room.hands[opp.index()].len(),
                captured_count: room.captured[opp.index()].len(),
                surs: room.surs[opp.index()],
            },
            final_result: room.final_result.clone(),
        }
    }
}
