use serde::{Deserialize, Serialize};

use super::{GameEventOpCode, GameEventOpCodeFetcher};

/// Players are announced by name, never by connection id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerJoinedEvent {
    pub game_code: String,
    pub player_name: String,
}

impl GameEventOpCodeFetcher for PlayerJoinedEvent {
    #[inline]
    fn op_code() -> GameEventOpCode {
        GameEventOpCode::PlayerJoined
    }
}
