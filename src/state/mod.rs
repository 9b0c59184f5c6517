//! Shared client-side state.
//!
//! State is split by domain (`auth`, `entries`) and provided to the
//! component tree as `RwSignal` contexts created in `App`, so consumers
//! receive an explicitly owned handle rather than reaching for ambient
//! globals.

pub mod auth;
pub mod entries;
