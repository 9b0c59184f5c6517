//! REST client: wire types, error taxonomy, and HTTP plumbing for the
//! backend's `/api/v1` endpoints.

pub mod api;
pub mod error;
pub mod types;
