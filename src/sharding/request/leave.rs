use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardLeaveRequest {
    pub game_code: String,
    pub player_name: String,
    pub host_id: Uuid,
    pub client_id: Uuid,
    pub shard_id: Uuid,
}
