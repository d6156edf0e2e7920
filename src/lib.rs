//! Message layer for a session-code multiplayer service: the joining-request
//! family, the envelopes it travels in, and the decode/dispatch boundary that
//! interprets it. The socket transport and the session registry live in the
//! services that consume this crate.

#[macro_use]
extern crate log;

pub mod error;
pub mod joining;
pub mod message_handler;
pub mod models;
pub mod names;
pub mod policy;
pub mod sharding;

pub use error::ProtocolError;
pub use joining::{request::JoinRequest, JoiningRequest, RequestType};
pub use message_handler::{decode_message, ClientMessageHandler, JoiningRequestHandler};
pub use models::{DefaultModel, OpCode, OpCodeFetcher};
