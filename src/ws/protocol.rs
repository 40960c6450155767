use serde::{Deserialize, Serialize};

use crate::domain::player_view::StateView;
use crate::domain::room::Slot;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMsg {
    #[serde(rename_all = "camelCase")]
    CreateRoom {
        #[serde(default)]
        display_name: Option<String>,
        #[serde(default)]
        external_id: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    JoinRoom {
        room_id: String,
        #[serde(default)]
        display_name: Option<String>,
        #[serde(default)]
        external_id: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    PlayCard { room_id: String, card_id: String },

    LeaveRoom,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMsg {
    #[serde(rename_all = "camelCase")]
    RoomCreated { room_id: String, your_slot: Slot },

    #[serde(rename_all = "camelCase")]
    Joined { room_id: String, your_slot: Slot },

    ErrorMsg { text: String },

    State(StateView),
}
