//! Central module for application-wide configuration settings.
//!
//! The only runtime setting is the Slack credential. The listen port, the
//! upstream endpoint and the timeouts are fixed for the lifetime of the
//! binary and live here as constants.

use anyhow::{Result, bail};
use std::env;
use std::time::Duration;

/// Port the HTTP server listens on.
pub const SERVER_PORT: u16 = 8080;

/// Upper bound on handling a single inbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Timeout for the outbound call to Slack. Kept below `REQUEST_TIMEOUT` so a
/// slow upstream is reported to the caller instead of cut off.
pub const SLACK_TIMEOUT: Duration = Duration::from_millis(1500);

/// Largest Slack reply the client will read.
pub const MAX_SLACK_RESPONSE_BYTES: usize = 64 * 1024;

/// Slack workspace endpoint invites are sent to.
pub const SLACK_INVITE_URL: &str = "https://cloud-native-nordics.slack.com/api/users.admin.invite";

#[derive(Debug, Clone)]
pub struct Config {
    pub slack_token: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_token(env::var("SLACK_TOKEN").ok())
    }

    fn from_token(slack_token: Option<String>) -> Result<Self> {
        match slack_token {
            Some(slack_token) if !slack_token.is_empty() => Ok(Config { slack_token }),
            _ => bail!("SLACK_TOKEN environment variable not set"),
        }
    }
}
