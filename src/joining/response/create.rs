use serde::{Deserialize, Serialize};

/// Reply to a create request: the allocated game code and the session's
/// player capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub game_code: String,
    pub player_count: i32,
}
