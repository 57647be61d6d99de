//! Handler functions for the invite endpoint.

use crate::services::invite_service::InviteService;
use crate::services::slack_service::InviteApi;
use axum::{
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
};
use std::sync::Arc;

/// Query pairs in the order they were sent, so a repeated key is kept.
type QueryPairs = Vec<(String, String)>;

/// Invites the `email` query parameter to the Slack workspace and reports
/// the result as plain text.
#[axum::debug_handler]
pub async fn send_invite(
    Extension(invite_api): Extension<Arc<dyn InviteApi>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> (StatusCode, String) {
    // First `email` wins. An unparseable query string counts as no email.
    let email = query.ok().and_then(|Query(pairs)| {
        pairs
            .into_iter()
            .find_map(|(key, value)| (key == "email").then_some(value))
    });

    let outcome = InviteService::new(invite_api.as_ref())
        .send_invite(email.as_deref())
        .await;

    (outcome.status_code(), outcome.message())
}
