//! Shared helpers for adapter integration tests.

pub mod raw_server;
pub mod stub_portal;
