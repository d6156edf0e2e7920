use serde::{Deserialize, Serialize};

use crate::models::{OpCode, OpCodeFetcher};

pub mod player_joined;
pub mod player_left;

// Models for session presence broadcasts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent<T> {
    event: Option<T>,
    op: GameEventOpCode,
}

impl<T> GameEvent<T> {
    pub fn new(event: T) -> Self
    where
        T: GameEventOpCodeFetcher,
    {
        let op = T::op_code();

        GameEvent {
            event: Some(event),
            op,
        }
    }

    #[inline]
    pub fn op(&self) -> GameEventOpCode {
        self.op
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameEventOpCode {
    /// Broadcast to a session when a player enters it
    PlayerJoined,
    /// Broadcast to a session when a player leaves or is dropped
    PlayerLeft,
}

pub trait GameEventOpCodeFetcher {
    fn op_code() -> GameEventOpCode;
}

impl<T> OpCodeFetcher for GameEvent<T> {
    #[inline]
    fn op_code() -> OpCode {
        OpCode::GameEvent
    }
}
