use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

use super::{ShardOpCode, ShardOpCodeFetcher};

pub mod join;
pub mod leave;

// Models for responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardResponse {
    pub(crate) d: Option<Vec<u8>>,
    pub(crate) op: ShardResponseOpCode,
}

impl ShardResponse {
    pub fn new<'a, T>(d: T, op: ShardResponseOpCode) -> Self
    where
        T: Serialize + Deserialize<'a>,
    {
        // Serialize message with flexbuffers
        let mut flex_serializer = flexbuffers::FlexbufferSerializer::new();
        d.serialize(&mut flex_serializer).unwrap();

        Self {
            d: Some(flex_serializer.view().to_vec()),
            op,
        }
    }

    pub fn data<'a, T>(&'a self) -> Result<T, ProtocolError>
    where
        T: Serialize + Deserialize<'a>,
    {
        let d = self.d.as_ref().ok_or(ProtocolError::MissingPayload)?;
        let reader = flexbuffers::Reader::get_root(d.as_slice())
            .map_err(|e| ProtocolError::MalformedShardPayload(e.to_string()))?;
        T::deserialize(reader).map_err(|e| ProtocolError::MalformedShardPayload(e.to_string()))
    }

    #[inline]
    pub fn op(&self) -> ShardResponseOpCode {
        self.op
    }
}

impl ShardOpCodeFetcher for ShardResponse {
    fn op_code() -> ShardOpCode {
        ShardOpCode::Response
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShardResponseOpCode {
    Join,
    Leave,
}

#[cfg(test)]
mod tests {
    use super::{
        join::ShardJoinResponse, leave::ShardLeaveResponse, ShardResponse, ShardResponseOpCode,
    };

    #[test]
    fn response_payload_round_trips() {
        let response = ShardResponse::new(
            ShardJoinResponse {
                game_code: "QQ99".to_string(),
                host_id: uuid::Uuid::new_v4(),
                client_id: uuid::Uuid::new_v4(),
                shard_id: uuid::Uuid::new_v4(),
                success: true,
            },
            ShardResponseOpCode::Join,
        );

        assert_eq!(response.op(), ShardResponseOpCode::Join);

        let join = response.data::<ShardJoinResponse>().unwrap();
        assert_eq!(join.game_code, "QQ99");
        assert!(join.success);
    }

    #[test]
    fn leave_payload_round_trips() {
        let client_id = uuid::Uuid::new_v4();
        let response = ShardResponse::new(
            ShardLeaveResponse {
                game_code: "QQ99".to_string(),
                client_id,
                shard_id: uuid::Uuid::new_v4(),
            },
            ShardResponseOpCode::Leave,
        );

        assert_eq!(response.op(), ShardResponseOpCode::Leave);
        let leave = response.data::<ShardLeaveResponse>().unwrap();
        assert_eq!(leave.client_id, client_id);
    }
}
