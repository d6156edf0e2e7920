use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::OpCode;

/// Wire-facing error notice sent to a client under `OpCode::Error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error<'a> {
    pub(crate) err: &'a str,
    pub(crate) code: u16,
}

impl<'a> Error<'a> {
    pub fn new(err: &'a str, code: u16) -> Error<'a> {
        Error { err, code }
    }
}

impl<'a> super::OpCodeFetcher for Error<'a> {
    #[inline]
    fn op_code() -> OpCode {
        OpCode::Error
    }
}

impl<'a> Display for Error<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error \"{}\" ({})", self.err, self.code)
    }
}

impl<'a> std::error::Error for Error<'a> {}
