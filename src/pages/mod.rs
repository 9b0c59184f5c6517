//! Top-level routed pages.

pub mod dashboard;
pub mod history;
pub mod login;
