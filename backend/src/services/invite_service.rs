//! Turns an invite request into an outcome the caller can be told about.
//!
//! Every path ends in an `InviteOutcome`, which knows its status code, the
//! text shown to the user and how loudly it should be logged.

use crate::errors::SlackError;
use crate::services::slack_service::{InviteApi, SlackResponse};
use axum::http::StatusCode;
use tracing::{info, warn};

/// Result of a single invite attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteOutcome {
    /// No email was supplied.
    MissingEmail,
    /// Slack could not be reached.
    PostFailed(String),
    /// Slack answered with something that is not a JSON object.
    MalformedResponse,
    /// The address already has an invite or is already a member.
    AlreadyInvited,
    InvalidEmail,
    /// The configured token was rejected.
    InvalidAuth,
    /// Slack rejected the invite for a reason we do not map.
    Unknown(Option<String>),
    Invited(String),
}

impl InviteOutcome {
    /// Maps a decoded Slack reply onto an outcome for `email`.
    pub fn from_response(email: &str, response: &SlackResponse) -> Self {
        if !response.is_rejected() {
            return Self::Invited(email.to_string());
        }

        match response.error.as_deref() {
            Some("already_invited") | Some("already_in_team") => Self::AlreadyInvited,
            Some("invalid_email") => Self::InvalidEmail,
            Some("invalid_auth") => Self::InvalidAuth,
            other => Self::Unknown(other.map(str::to_string)),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Invited(_) | Self::AlreadyInvited => StatusCode::OK,
            Self::MissingEmail
            | Self::PostFailed(_)
            | Self::MalformedResponse
            | Self::InvalidEmail => StatusCode::BAD_REQUEST,
            Self::InvalidAuth | Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text returned to the caller.
    pub fn message(&self) -> String {
        match self {
            Self::MissingEmail => "email not found".to_string(),
            Self::PostFailed(err) => format!("slack post failed: {err}"),
            Self::MalformedResponse => "decode slack response failed".to_string(),
            Self::AlreadyInvited => "Success! You were already invited.\n".to_string(),
            Self::InvalidEmail => "The email you entered is an invalid email.\n".to_string(),
            Self::InvalidAuth => {
                "Invalid auth: Something has gone wrong. Please contact a system administrator.\n"
                    .to_string()
            }
            Self::Unknown(_) => {
                "Catch all: Something has gone wrong. Please contact a system administrator.\n"
                    .to_string()
            }
            Self::Invited(email) => {
                format!("Success! Check \"{email}\" for an invite from Slack.\n")
            }
        }
    }

    fn log(&self) {
        match self {
            Self::MissingEmail => info!("Received empty email"),
            Self::PostFailed(err) => warn!(
                "HTTP post to Slack failed, the Slack API may be down: {}",
                err
            ),
            Self::MalformedResponse => warn!("Failed to decode Slack response"),
            Self::AlreadyInvited => info!("Invite successful: already in team"),
            Self::InvalidEmail => info!("Invite failed: email is invalid"),
            Self::InvalidAuth => {
                warn!("Invite failed: invalid auth, is the SLACK_TOKEN environment variable correct?")
            }
            Self::Unknown(code) => warn!(
                "Invite failed: unmapped Slack error {}",
                code.as_deref().unwrap_or("<none>")
            ),
            Self::Invited(_) => info!("Invite successful: invited to team"),
        }
    }
}

pub struct InviteService<'a> {
    api: &'a dyn InviteApi,
}

impl<'a> InviteService<'a> {
    pub fn new(api: &'a dyn InviteApi) -> Self {
        Self { api }
    }

    /// Sends an invite for `email`. Slack is not contacted when the email is
    /// missing or empty.
    pub async fn send_invite(&self, email: Option<&str>) -> InviteOutcome {
        let outcome = match email.filter(|e| !e.is_empty()) {
            None => InviteOutcome::MissingEmail,
            Some(email) => {
                info!("Email received: {}", email);
                match self.api.invite(email).await {
                    Ok(response) => InviteOutcome::from_response(email, &response),
                    Err(SlackError::Transport(err)) => InviteOutcome::PostFailed(err),
                    Err(SlackError::Decode(_)) => InviteOutcome::MalformedResponse,
                }
            }
        };

        outcome.log();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SlackResult;
    use async_trait::async_trait;

    fn rejected(code: &str) -> SlackResponse {
        SlackResponse {
            ok: Some(false),
            error: Some(code.to_string()),
        }
    }

    #[test]
    fn test_outcome_mapping() {
        let email = "jane@example.com";
        let cases = [
            ("already_invited", InviteOutcome::AlreadyInvited, StatusCode::OK),
            ("already_in_team", InviteOutcome::AlreadyInvited, StatusCode::OK),
            ("invalid_email", InviteOutcome::InvalidEmail, StatusCode::BAD_REQUEST),
            (
                "invalid_auth",
                InviteOutcome::InvalidAuth,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                "team_is_restricted",
                InviteOutcome::Unknown(Some("team_is_restricted".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (code, expected, status) in cases {
            let outcome = InviteOutcome::from_response(email, &rejected(code));
            assert_eq!(outcome, expected, "error code {code}");
            assert_eq!(outcome.status_code(), status, "error code {code}");
        }
    }

    #[test]
    fn test_rejection_without_error_code() {
        let response = SlackResponse {
            ok: Some(false),
            error: None,
        };
        let outcome = InviteOutcome::from_response("a@b.c", &response);
        assert_eq!(outcome, InviteOutcome::Unknown(None));
        assert!(outcome.message().starts_with("Catch all:"));
    }

    #[test]
    fn test_anything_but_false_is_success() {
        for ok in [Some(true), None] {
            let response = SlackResponse { ok, error: None };
            let outcome = InviteOutcome::from_response("a@b.c", &response);
            assert_eq!(outcome, InviteOutcome::Invited("a@b.c".to_string()));
            assert_eq!(
                outcome.message(),
                "Success! Check \"a@b.c\" for an invite from Slack.\n"
            );
        }
    }

    struct Failing(fn() -> SlackError);

    #[async_trait]
    impl InviteApi for Failing {
        async fn invite(&self, _email: &str) -> SlackResult<SlackResponse> {
            Err((self.0)())
        }
    }

    #[tokio::test]
    async fn test_send_invite_errors() {
        let api = Failing(|| SlackError::transport("connection refused"));
        let outcome = InviteService::new(&api).send_invite(Some("a@b.c")).await;
        assert_eq!(outcome.message(), "slack post failed: connection refused");
        assert_eq!(outcome.status_code(), StatusCode::BAD_REQUEST);

        let api = Failing(|| SlackError::decode("expected value"));
        let outcome = InviteService::new(&api).send_invite(Some("a@b.c")).await;
        assert_eq!(outcome, InviteOutcome::MalformedResponse);
    }

    #[tokio::test]
    async fn test_empty_email_skips_slack() {
        let api = Failing(|| panic!("slack must not be called"));
        let service = InviteService::new(&api);

        assert_eq!(service.send_invite(None).await, InviteOutcome::MissingEmail);
        assert_eq!(
            service.send_invite(Some("")).await,
            InviteOutcome::MissingEmail
        );
    }
}
