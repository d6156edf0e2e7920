use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{OpCode, OpCodeFetcher};

/// Decode failures surfaced by the layers that produce message values.
///
/// The message types themselves never fail: a `JoinRequest` holds whatever it
/// was constructed with. Anything that went wrong between the wire and a
/// constructed value lands here instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProtocolError {
    /// Raw text did not parse as a message envelope.
    MalformedMessage(String),
    /// The opcode requires a payload but none was sent.
    MissingPayload,
    /// The envelope opcode is not one this layer consumes.
    InvalidOpCode,
    /// The payload did not decode as a join request. Covers unknown request
    /// types as well as missing or mistyped fields.
    MalformedJoinRequest(String),
    /// A shard relay payload failed to decode.
    MalformedShardPayload(String),
}

impl OpCodeFetcher for ProtocolError {
    #[inline]
    fn op_code() -> OpCode {
        OpCode::Error
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MalformedMessage(reason) => {
                write!(f, "malformed message: {}", reason)
            }
            ProtocolError::MissingPayload => write!(f, "no data was sent with opcode"),
            ProtocolError::InvalidOpCode => write!(f, "invalid receive opcode"),
            ProtocolError::MalformedJoinRequest(reason) => {
                write!(f, "malformed join request: {}", reason)
            }
            ProtocolError::MalformedShardPayload(reason) => {
                write!(f, "malformed shard payload: {}", reason)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

#[cfg(test)]
mod tests {
    use super::ProtocolError;

    #[test]
    fn display_names_the_failure_kind() {
        let err = ProtocolError::MalformedJoinRequest("missing field `playerName`".to_string());
        assert!(err.to_string().contains("malformed join request"));
        assert!(err.to_string().contains("missing field `playerName`"));
    }

    #[test]
    fn serializes_for_the_wire() {
        let err = ProtocolError::MissingPayload;
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"MissingPayload\"");
    }
}
