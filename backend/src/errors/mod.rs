//! Application error types.
//!
//! Failures talking to Slack are typed here so the invite service can turn
//! each one into a deliberate HTTP response.

use thiserror::Error;

/// Represents errors that can occur while calling the Slack invite API.
#[derive(Debug, Error)]
pub enum SlackError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("{0}")]
    Transport(String),
    /// The response body was not a JSON object.
    #[error("decode slack response failed: {0}")]
    Decode(String),
}

pub type SlackResult<T> = Result<T, SlackError>;

impl SlackError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}
