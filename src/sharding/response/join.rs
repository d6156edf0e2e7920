use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a cross-shard join, addressed back to the requesting client's
/// shard. `success` is false when the hosting session refused the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardJoinResponse {
    pub game_code: String,
    pub host_id: Uuid,
    pub client_id: Uuid,
    pub shard_id: Uuid,
    pub success: bool,
}
