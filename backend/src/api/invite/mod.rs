//! Module for the invite endpoint.
//!
//! Accepts an email address and asks Slack to invite it to the workspace.

pub mod handlers;
pub mod routes;
