use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::models::{OpCode, OpCodeFetcher};

use super::RequestType;

/// A single player-joining protocol message.
///
/// The message carries exactly what the client sent: no field is validated,
/// trimmed, or defaulted here. Empty names, empty codes and negative counts
/// all construct; rejecting them is the business of the session layer (or of
/// an opt-in [`JoinPolicy`](crate::policy::JoinPolicy)). Once built, an
/// instance never changes and owns its text outright, so it can be shared
/// across tasks freely.
///
/// On the wire the fields use camelCase: `requestType`, `playerName`,
/// `gameCode`, `playerCount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    request_type: RequestType,
    player_name: String,
    game_code: String,
    player_count: i32,
}

impl JoinRequest {
    pub fn new(
        request_type: RequestType,
        player_name: String,
        game_code: String,
        player_count: i32,
    ) -> JoinRequest {
        JoinRequest {
            request_type,
            player_name,
            game_code,
            player_count,
        }
    }

    /// Decode a bare join request from its wire representation.
    pub fn from_json(json_data: &str) -> Result<JoinRequest, ProtocolError> {
        serde_json::from_str(json_data)
            .map_err(|e| ProtocolError::MalformedJoinRequest(e.to_string()))
    }

    /// Encode the request into its wire representation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self)
    }

    #[inline]
    pub fn request_type(&self) -> RequestType {
        self.request_type
    }

    /// Get a reference to the requesting player's name.
    #[inline]
    pub fn player_name(&self) -> &str {
        self.player_name.as_ref()
    }

    /// Get a reference to the targeted game code.
    #[inline]
    pub fn game_code(&self) -> &str {
        self.game_code.as_ref()
    }

    #[inline]
    pub fn player_count(&self) -> i32 {
        self.player_count
    }
}

impl OpCodeFetcher for JoinRequest {
    #[inline]
    fn op_code() -> OpCode {
        OpCode::JoiningRequest
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{OpCode, OpCodeFetcher};

    use super::{JoinRequest, RequestType};

    #[test]
    fn accessors_return_constructed_values() {
        let request = JoinRequest::new(
            RequestType::Join,
            "Alice".to_string(),
            "AB12".to_string(),
            4,
        );
        assert_eq!(request.request_type(), RequestType::Join);
        assert_eq!(request.player_name(), "Alice");
        assert_eq!(request.game_code(), "AB12");
        assert_eq!(request.player_count(), 4);
    }

    #[test]
    fn empty_and_zero_values_construct_without_error() {
        let request = JoinRequest::new(RequestType::Create, String::new(), String::new(), 0);
        assert_eq!(request.request_type(), RequestType::Create);
        assert_eq!(request.player_name(), "");
        assert_eq!(request.game_code(), "");
        assert_eq!(request.player_count(), 0);
    }

    #[test]
    fn negative_counts_are_kept_as_is() {
        let request = JoinRequest::new(
            RequestType::Join,
            "Bob".to_string(),
            "ZZZZ".to_string(),
            -3,
        );
        assert_eq!(request.player_count(), -3);
    }

    #[test]
    fn construction_does_not_alias_caller_storage() {
        let mut name = String::from("Alice");
        let request = JoinRequest::new(
            RequestType::Join,
            name.clone(),
            "AB12".to_string(),
            4,
        );

        name.push_str("-mutated");
        name.clear();

        assert_eq!(request.player_name(), "Alice");
        assert_eq!(request.player_name(), "Alice");
    }

    #[test]
    fn instances_with_equal_fields_are_independent() {
        let first = JoinRequest::new(
            RequestType::Leave,
            "Cara".to_string(),
            "QQ99".to_string(),
            2,
        );
        let second = JoinRequest::new(
            RequestType::Leave,
            "Cara".to_string(),
            "QQ99".to_string(),
            2,
        );

        drop(first);

        assert_eq!(second.player_name(), "Cara");
        assert_eq!(second.game_code(), "QQ99");
    }

    #[test]
    fn wire_fields_are_camel_case() {
        let request = JoinRequest::new(
            RequestType::Join,
            "Alice".to_string(),
            "AB12".to_string(),
            4,
        );
        let json = request.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["requestType"], "Join");
        assert_eq!(value["playerName"], "Alice");
        assert_eq!(value["gameCode"], "AB12");
        assert_eq!(value["playerCount"], 4);
    }

    #[test]
    fn decodes_from_wire_representation() {
        let request = JoinRequest::from_json(
            r#"{"requestType":"Join","playerName":"Alice","gameCode":"AB12","playerCount":4}"#,
        )
        .unwrap();
        assert_eq!(request.request_type(), RequestType::Join);
        assert_eq!(request.player_name(), "Alice");
        assert_eq!(request.game_code(), "AB12");
        assert_eq!(request.player_count(), 4);
    }

    #[test]
    fn decode_is_permissive_about_values() {
        let request = JoinRequest::from_json(
            r#"{"requestType":"Create","playerName":"","gameCode":"","playerCount":-1}"#,
        )
        .unwrap();
        assert_eq!(request.player_name(), "");
        assert_eq!(request.game_code(), "");
        assert_eq!(request.player_count(), -1);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        assert!(JoinRequest::from_json("not json").is_err());
        assert!(JoinRequest::from_json(r#"{"playerName":"Alice"}"#).is_err());
        assert!(JoinRequest::from_json(
            r#"{"requestType":"Dance","playerName":"Alice","gameCode":"AB12","playerCount":4}"#,
        )
        .is_err());
    }

    #[test]
    fn travels_under_the_joining_request_opcode() {
        assert_eq!(JoinRequest::op_code(), OpCode::JoiningRequest);
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JoinRequest>();
    }
}
