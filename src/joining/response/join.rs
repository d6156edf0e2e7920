use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub game_code: String,
    /// Session occupancy after the join was applied.
    pub player_count: i32,
    pub is_host: bool,
    pub success: bool,
}
