//! Snapshot persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the key/value persistence contract for tracker state.
//! - Keep SQLite and JSON envelope details out of service code.
//!
//! # Invariants
//! - A missing key loads as an empty collection (first-run state).
//! - A present but unreadable value is an `InvalidData` error, never masked.

pub mod state_repo;
