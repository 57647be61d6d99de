//! Defines the HTTP route for sending Slack invites.

use super::handlers::send_invite;
use axum::{Router, routing::get};

pub fn invite_router() -> Router {
    Router::new().route("/invite", get(send_invite))
}
