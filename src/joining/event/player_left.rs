use serde::{Deserialize, Serialize};

use super::{GameEventOpCode, GameEventOpCodeFetcher};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLeftEvent {
    pub game_code: String,
    pub player_name: String,
}

impl GameEventOpCodeFetcher for PlayerLeftEvent {
    #[inline]
    fn op_code() -> GameEventOpCode {
        GameEventOpCode::PlayerLeft
    }
}
