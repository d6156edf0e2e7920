use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardLeaveResponse {
    pub game_code: String,
    pub client_id: Uuid,
    pub shard_id: Uuid,
}
