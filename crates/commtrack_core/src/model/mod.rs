//! Domain model for companies, communications and the method catalog.
//!
//! # Responsibility
//! - Define the canonical records shared by store, status and report code.
//! - Fix one wire schema (camelCase JSON) for persisted snapshots.
//!
//! # Invariants
//! - Ids are opaque strings; equality is the only operation on them.
//! - Method names on a company reference catalog entries by value only.

pub mod communication;
pub mod company;
pub mod ids;
pub mod method;
