//! Communication method catalog entry.
//!
//! The catalog is independent of any company; companies reference entries by
//! `name` only.

use crate::model::ids::MethodId;
use serde::{Deserialize, Serialize};

/// One available contact channel in the admin catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationMethod {
    pub id: MethodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Ordering rank; lower sorts first.
    #[serde(default)]
    pub sequence: u32,
    #[serde(default)]
    pub is_mandatory: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CommunicationMethod {
    /// Creates an active, non-mandatory method with a generated id.
    pub fn new(name: impl Into<String>, sequence: u32) -> Self {
        Self {
            id: MethodId::generate(),
            name: name.into(),
            description: String::new(),
            sequence,
            is_mandatory: false,
            is_active: true,
        }
    }
}
