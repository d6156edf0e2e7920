use serde::{Deserialize, Serialize};

use crate::models::{OpCode, OpCodeFetcher};

pub mod create;
pub mod join;
pub mod leave;

// Models for responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    d: Option<T>,
    op: ResponseOpCode,
}

impl<T> Response<T> {
    pub fn new(d: Option<T>, op: ResponseOpCode) -> Self {
        Response { d, op }
    }

    #[inline]
    pub fn op(&self) -> ResponseOpCode {
        self.op
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResponseOpCode {
    Create,
    Join,
    Leave,
}

impl<T> OpCodeFetcher for Response<T> {
    #[inline]
    fn op_code() -> OpCode {
        OpCode::Response
    }
}
