use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use super::OpCode;

/// First frame sent to a freshly accepted connection.
///
/// Carries the session id the service assigned to the socket and the guest
/// name the player keeps until a joining request supplies a real one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hello {
    pub id: Uuid,
    pub player_name: String,
}

impl super::OpCodeFetcher for Hello {
    #[inline]
    fn op_code() -> OpCode {
        OpCode::Hello
    }
}
