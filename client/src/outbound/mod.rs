//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and the portal
//! backend's HTTP contract. They contain no business logic.

pub mod portal_http;
