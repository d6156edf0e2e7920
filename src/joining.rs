use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

pub use request::JoinRequest;

pub mod event;
pub mod request;
pub mod response;

/// Classifies the purpose of a joining message.
///
/// Serialized as the variant name. Deserialization also accepts the `u8`
/// discriminant, which older clients still send; anything else is a decode
/// error at the layer that parses the message, never a panic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, IntoPrimitive, TryFromPrimitive,
)]
#[repr(u8)]
pub enum RequestType {
    Create = 0,
    Join = 1,
    Leave = 2,
}

impl RequestType {
    const NAMES: &'static [&'static str] = &["Create", "Join", "Leave"];
}

impl<'de> Deserialize<'de> for RequestType {
    fn deserialize<D>(deserializer: D) -> Result<RequestType, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RequestTypeVisitor;

        impl<'de> serde::de::Visitor<'de> for RequestTypeVisitor {
            type Value = RequestType;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a request type name or its numeric code")
            }

            fn visit_str<E>(self, value: &str) -> Result<RequestType, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "Create" => Ok(RequestType::Create),
                    "Join" => Ok(RequestType::Join),
                    "Leave" => Ok(RequestType::Leave),
                    _ => Err(E::unknown_variant(value, RequestType::NAMES)),
                }
            }

            fn visit_u64<E>(self, value: u64) -> Result<RequestType, E>
            where
                E: serde::de::Error,
            {
                let code = u8::try_from(value).map_err(|_| {
                    E::custom(format!("request type code out of range: {}", value))
                })?;
                RequestType::try_from(code)
                    .map_err(|_| E::custom(format!("unknown request type code: {}", code)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<RequestType, E>
            where
                E: serde::de::Error,
            {
                if value < 0 {
                    return Err(E::custom(format!(
                        "request type code out of range: {}",
                        value
                    )));
                }
                self.visit_u64(value as u64)
            }
        }

        deserializer.deserialize_any(RequestTypeVisitor)
    }
}

/// The joining-request family at the dispatch boundary.
///
/// One variant per concrete request kind; consumers match on this instead of
/// re-reading the classification field of the wire message.
#[derive(Debug, Clone)]
pub enum JoiningRequest {
    /// Open a new session; the service allocates the game code.
    Create(JoinRequest),
    /// Enter an existing session named by its game code.
    Join(JoinRequest),
    /// Leave the session named by its game code.
    Leave(JoinRequest),
}

impl From<JoinRequest> for JoiningRequest {
    fn from(request: JoinRequest) -> JoiningRequest {
        match request.request_type() {
            RequestType::Create => JoiningRequest::Create(request),
            RequestType::Join => JoiningRequest::Join(request),
            RequestType::Leave => JoiningRequest::Leave(request),
        }
    }
}

impl JoiningRequest {
    /// Get a reference to the wrapped wire message.
    pub fn request(&self) -> &JoinRequest {
        match self {
            JoiningRequest::Create(request)
            | JoiningRequest::Join(request)
            | JoiningRequest::Leave(request) => request,
        }
    }
}
