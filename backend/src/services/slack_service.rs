//! Client for Slack's `users.admin.invite` endpoint.

use crate::config::{MAX_SLACK_RESPONSE_BYTES, SLACK_INVITE_URL, SLACK_TIMEOUT};
use crate::errors::{SlackError, SlackResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reply from the invite endpoint.
///
/// Slack only promises `ok`, plus `error` when `ok` is false. Fields of an
/// unexpected JSON type are treated as missing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct SlackResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub ok: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub error: Option<String>,
}

impl SlackResponse {
    /// Parses the first JSON value of a response body; anything after it is
    /// ignored. `null` reads as an empty object, other non-objects are
    /// rejected.
    pub fn from_slice(body: &[u8]) -> SlackResult<Self> {
        let value = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
            .ok_or_else(|| SlackError::decode("empty response body"))?
            .map_err(|e| SlackError::decode(e.to_string()))?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| SlackError::decode(e.to_string()))
            }
            _ => Err(SlackError::decode("expected a JSON object")),
        }
    }

    /// Only an explicit `"ok": false` counts as a rejection.
    pub fn is_rejected(&self) -> bool {
        self.ok == Some(false)
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Anything that can deliver a workspace invite.
#[async_trait]
pub trait InviteApi: Send + Sync {
    async fn invite(&self, email: &str) -> SlackResult<SlackResponse>;
}

/// Sends invites through the Slack web API.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http_client: Client,
    invite_url: String,
    token: String,
}

impl SlackClient {
    /// Creates a client for the default workspace endpoint.
    pub fn new(token: String) -> SlackResult<Self> {
        Self::with_url(token, SLACK_INVITE_URL)
    }

    pub fn with_url(token: String, invite_url: impl Into<String>) -> SlackResult<Self> {
        let http_client = Client::builder()
            .timeout(SLACK_TIMEOUT)
            .build()
            .map_err(|e| SlackError::transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            invite_url: invite_url.into(),
            token,
        })
    }
}

#[async_trait]
impl InviteApi for SlackClient {
    async fn invite(&self, email: &str) -> SlackResult<SlackResponse> {
        let form = [
            ("email", email),
            ("token", self.token.as_str()),
            ("set_active", "true"),
        ];

        let mut response = self
            .http_client
            .post(&self.invite_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| SlackError::transport(e.to_string()))?;

        if response
            .content_length()
            .is_some_and(|len| len > MAX_SLACK_RESPONSE_BYTES as u64)
        {
            return Err(SlackError::decode("response body too large"));
        }

        // Slack reports failures in the body, so the status code is not checked.
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| SlackError::decode(e.to_string()))?
        {
            if body.len() + chunk.len() > MAX_SLACK_RESPONSE_BYTES {
                return Err(SlackError::decode("response body too large"));
            }
            body.extend_from_slice(&chunk);
        }

        SlackResponse::from_slice(&body)
    }
}
