//! Module for core business logic services.
//!
//! `slack_service` talks to Slack; `invite_service` decides what the caller
//! is told about the result.

pub mod invite_service;
pub mod slack_service;
