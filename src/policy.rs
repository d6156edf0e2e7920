use std::fmt;

use serde::{Deserialize, Serialize};

use crate::joining::JoinRequest;

/// Opt-in limits for joining requests.
///
/// Decode never applies these; a request holds whatever the client sent.
/// The session layer runs [`validate`](JoinPolicy::validate) on requests it is
/// about to act on, if it wants limits at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinPolicy {
    pub max_player_name_len: usize,
    pub game_code_len: usize,
    pub max_player_count: i32,
}

impl Default for JoinPolicy {
    fn default() -> JoinPolicy {
        JoinPolicy {
            max_player_name_len: 24,
            game_code_len: 4,
            max_player_count: 16,
        }
    }
}

impl JoinPolicy {
    /// Read limits from the environment, falling back to the defaults when
    /// the variables are absent or unparseable.
    pub fn from_env() -> JoinPolicy {
        match envy::from_env::<JoinPolicy>() {
            Ok(policy) => policy,
            Err(_) => JoinPolicy::default(),
        }
    }

    /// Read limits from a toml document. Unset keys keep their defaults.
    pub fn from_toml(toml: &str) -> Result<JoinPolicy, toml::de::Error> {
        toml::from_str(toml)
    }

    pub fn validate(&self, request: &JoinRequest) -> Result<(), PolicyError> {
        let name = request.player_name();
        if name.is_empty() || name.len() > self.max_player_name_len {
            return Err(PolicyError::PlayerNameLength {
                len: name.len(),
                max: self.max_player_name_len,
            });
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ' ')
        {
            return Err(PolicyError::PlayerNameCharset);
        }

        let code = request.game_code();
        if code.len() != self.game_code_len || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PolicyError::GameCodeFormat {
                expected_len: self.game_code_len,
            });
        }

        let count = request.player_count();
        if count < 1 || count > self.max_player_count {
            return Err(PolicyError::PlayerCountRange {
                count,
                max: self.max_player_count,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PolicyError {
    PlayerNameLength { len: usize, max: usize },
    PlayerNameCharset,
    GameCodeFormat { expected_len: usize },
    PlayerCountRange { count: i32, max: i32 },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::PlayerNameLength { len, max } => {
                write!(f, "player name length {} outside 1..={}", len, max)
            }
            PolicyError::PlayerNameCharset => {
                write!(f, "player name contains characters outside the allowed set")
            }
            PolicyError::GameCodeFormat { expected_len } => {
                write!(f, "game code is not {} alphanumeric characters", expected_len)
            }
            PolicyError::PlayerCountRange { count, max } => {
                write!(f, "player count {} outside 1..={}", count, max)
            }
        }
    }
}

impl std::error::Error for PolicyError {}
