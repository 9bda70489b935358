//! Use-case services and read projections.
//!
//! # Responsibility
//! - Orchestrate store mutations with the persistence hook.
//! - Project store state into dashboard and calendar read models.

pub mod calendar;
pub mod dashboard;
pub mod tracker_service;
