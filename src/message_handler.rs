use serde_json::Value;

use crate::error::ProtocolError;
use crate::joining::{JoinRequest, JoiningRequest};
use crate::models::{DefaultModel, OpCode};

/*
    # Flow of one inbound frame

    transport text ───► decode_message(...) ───► DefaultModel<Value>
                                                        │
    ┌──────────── op == JoiningRequest ◄────────────────┘
    │
    └────► payload decoded as JoinRequest ───► classified ───► handler.on_*(...)
*/

/// The seam where the session layer plugs in.
///
/// Implementations receive fully decoded requests; whatever they do with them
/// (registries, lobbies, capacity checks) is outside this crate.
pub trait JoiningRequestHandler {
    fn on_create(&mut self, request: JoinRequest) -> Result<(), Box<dyn std::error::Error>>;
    fn on_join(&mut self, request: JoinRequest) -> Result<(), Box<dyn std::error::Error>>;
    fn on_leave(&mut self, request: JoinRequest) -> Result<(), Box<dyn std::error::Error>>;
}

/// Decode one raw frame into the generic envelope.
pub fn decode_message(json_data: &str) -> Result<DefaultModel<Value>, ProtocolError> {
    serde_json::from_str(json_data).map_err(|e| {
        warn!("failed to decode message envelope: {}", e);
        ProtocolError::MalformedMessage(e.to_string())
    })
}

pub struct ClientMessageHandler {}

impl ClientMessageHandler {
    pub fn handle_message<H>(
        handler: &mut H,
        model: DefaultModel<Value>,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        H: JoiningRequestHandler,
    {
        let data = if let Some(data) = model.d {
            data
        } else {
            return Err(Box::new(ProtocolError::MissingPayload));
        };

        match model.op {
            OpCode::JoiningRequest => {
                let request: JoinRequest = serde_json::from_value(data).map_err(|e| {
                    warn!("failed to decode join request payload: {}", e);
                    ProtocolError::MalformedJoinRequest(e.to_string())
                })?;

                trace!(
                    "dispatching {:?} request for game \"{}\"",
                    request.request_type(),
                    request.game_code()
                );

                match JoiningRequest::from(request) {
                    JoiningRequest::Create(request) => handler.on_create(request),
                    JoiningRequest::Join(request) => handler.on_join(request),
                    JoiningRequest::Leave(request) => handler.on_leave(request),
                }
            }
            _ => Err(Box::new(ProtocolError::InvalidOpCode)),
        }
    }
}
