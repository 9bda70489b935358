//! Communication method catalog store.
//!
//! Persisted under its own key, independent of the tracker snapshot.

use crate::model::ids::MethodId;
use crate::model::method::CommunicationMethod;
use log::debug;
use serde::{Deserialize, Serialize};

/// Serializable view of the method catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodsSnapshot {
    #[serde(default)]
    pub methods: Vec<CommunicationMethod>,
}

#[derive(Debug, Clone, Default)]
pub struct MethodCatalog {
    methods: Vec<CommunicationMethod>,
}

impl MethodCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: MethodsSnapshot) -> Self {
        Self {
            methods: snapshot.methods,
        }
    }

    pub fn snapshot(&self) -> MethodsSnapshot {
        MethodsSnapshot {
            methods: self.methods.clone(),
        }
    }

    pub fn methods(&self) -> &[CommunicationMethod] {
        &self.methods
    }

    /// Appends a method; new entries always start active.
    pub fn add_method(&mut self, mut method: CommunicationMethod) {
        method.is_active = true;
        debug!("event=method_add module=catalog id={}", method.id);
        self.methods.push(method);
    }

    /// Replace-by-id; returns `false` when the id is unknown.
    pub fn update_method(&mut self, method: CommunicationMethod) -> bool {
        match self.methods.iter_mut().find(|m| m.id == method.id) {
            Some(slot) => {
                *slot = method;
                true
            }
            None => false,
        }
    }

    /// Flips `is_active`; returns the new value, or `None` for unknown ids.
    pub fn toggle_method(&mut self, id: &MethodId) -> Option<bool> {
        let method = self.methods.iter_mut().find(|m| &m.id == id)?;
        method.is_active = !method.is_active;
        debug!(
            "event=method_toggle module=catalog id={id} active={}",
            method.is_active
        );
        Some(method.is_active)
    }

    pub fn delete_method(&mut self, id: &MethodId) -> bool {
        let before = self.methods.len();
        self.methods.retain(|m| &m.id != id);
        before != self.methods.len()
    }

    /// Catalog sorted by `sequence`; equal ranks keep insertion order.
    pub fn ordered_by_sequence(&self) -> Vec<&CommunicationMethod> {
        let mut ordered: Vec<&CommunicationMethod> = self.methods.iter().collect();
        ordered.sort_by_key(|m| m.sequence);
        ordered
    }

    /// Method names in sequence order, used to seed a company's preferences.
    pub fn default_preferred_sequence(&self) -> Vec<String> {
        self.ordered_by_sequence()
            .into_iter()
            .map(|m| m.name.clone())
            .collect()
    }
}
