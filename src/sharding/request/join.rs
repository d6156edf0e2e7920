use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Asks the shard hosting `game_code`'s session to admit a remote client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardJoinRequest {
    pub game_code: String,
    pub player_name: String,
    pub host_id: Uuid,
    pub client_id: Uuid,
    pub shard_id: Uuid,
}
