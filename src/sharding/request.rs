use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

use super::{ShardOpCode, ShardOpCodeFetcher};

pub mod join;
pub mod leave;

// Models for requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardRequest {
    pub(crate) d: Option<Vec<u8>>,
    pub(crate) op: ShardRequestOpCode,
}

impl ShardRequest {
    pub fn new<'a, T>(d: T, op: ShardRequestOpCode) -> Self
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
    pub fn op(&self) -> ShardRequestOpCode {
        self.op
    }
}

impl ShardOpCodeFetcher for ShardRequest {
    fn op_code() -> ShardOpCode {
        ShardOpCode::Request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShardRequestOpCode {
    Join,
    Leave,
}
