//! In-memory entity stores.
//!
//! # Responsibility
//! - Hold companies, communications and the method catalog as explicit
//!   owned objects (no process-wide singleton).
//! - Apply synchronous, total mutations visible to the next read.
//!
//! # Invariants
//! - Store mutations never fail; absent ids make update/delete a no-op.
//! - Company deletion cascades to that company's communications only.

pub mod entity_store;
pub mod method_catalog;
