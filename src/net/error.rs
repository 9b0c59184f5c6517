//! Client-side error taxonomy.
//!
//! Authentication failures recover by clearing session state and
//! redirecting to sign-in; everything else is returned to the caller and
//! rendered inline. Nothing panics past the network boundary.

use thiserror::Error;

/// Errors surfaced by the REST client and the data-access layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No valid session token; the operation was refused before any
    /// network call.
    #[error("not authenticated — please sign in")]
    Unauthenticated,

    /// The backend answered 401. The token slot has already been
    /// cleared and a sign-in redirect issued by the time the caller
    /// sees this.
    #[error("session expired — please sign in again")]
    SessionExpired,

    /// Any non-401 error status; carries the backend's `detail` message
    /// when one was provided.
    #[error("{0}")]
    Backend(String),

    /// The transport failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("invalid response: {0}")]
    Decode(String),
}
