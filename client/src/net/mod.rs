//! Networking modules for the moderation REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `query` builds their query strings, `types`
//! defines the wire schema, and `error` is the single failure type callers see.

pub mod api;
pub mod error;
pub mod query;
pub mod types;
