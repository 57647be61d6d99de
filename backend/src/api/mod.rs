//! HTTP surface of the service.
//!
//! `router` assembles the invite routes with the layers every response goes
//! through: the permissive CORS origin header and the request timeout.

pub mod invite;

use crate::config::REQUEST_TIMEOUT;
use crate::services::slack_service::InviteApi;
use axum::http::{HeaderValue, StatusCode, header};
use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

pub fn router(invite_api: Arc<dyn InviteApi>) -> Router {
    Router::new()
        .merge(invite::routes::invite_router())
        .layer(Extension(invite_api))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        // Outermost, so 404s and timeouts carry the header too.
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
