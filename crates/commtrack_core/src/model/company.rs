//! Company domain model.
//!
//! # Responsibility
//! - Define the tracked company record and its contact cadence.
//! - Provide list helpers for preferred/mandatory method edits.
//!
//! # Invariants
//! - `id` is unique within the company collection (enforced by callers).
//! - `communication_periodicity` is a day count; the store does not reject 0.
//! - `mandatory_methods` has set semantics: toggling never duplicates a name.

use crate::model::ids::CompanyId;
use serde::{Deserialize, Serialize};

/// A company whose contact cadence is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin_profile: String,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    /// Days between expected contacts.
    pub communication_periodicity: u32,
    /// Ordered method names, by value. Older snapshots may omit the field.
    #[serde(default)]
    pub preferred_methods: Vec<String>,
    #[serde(default)]
    pub mandatory_methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl Company {
    /// Creates a company with a generated id and empty contact fields.
    pub fn new(name: impl Into<String>, communication_periodicity: u32) -> Self {
        Self::with_id(CompanyId::generate(), name, communication_periodicity)
    }

    /// Creates a company with a caller-provided id.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: impl Into<CompanyId>,
        name: impl Into<String>,
        communication_periodicity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: String::new(),
            linkedin_profile: String::new(),
            emails: Vec::new(),
            phone_numbers: Vec::new(),
            communication_periodicity,
            preferred_methods: Vec::new(),
            mandatory_methods: Vec::new(),
            comments: None,
        }
    }

    /// Moves one preferred method from `from` to `to` (remove then insert).
    ///
    /// Returns `false` and leaves the list untouched when either index is out
    /// of range.
    pub fn reorder_preferred_method(&mut self, from: usize, to: usize) -> bool {
        let len = self.preferred_methods.len();
        if from >= len || to >= len {
            return false;
        }
        let moved = self.preferred_methods.remove(from);
        self.preferred_methods.insert(to, moved);
        true
    }

    /// Adds `name` to the mandatory set when absent, removes it otherwise.
    ///
    /// Returns whether the method is mandatory after the toggle.
    pub fn toggle_mandatory_method(&mut self, name: &str) -> bool {
        if let Some(index) = self.mandatory_methods.iter().position(|m| m == name) {
            self.mandatory_methods.remove(index);
            false
        } else {
            self.mandatory_methods.push(name.to_string());
            true
        }
    }

    pub fn is_mandatory_method(&self, name: &str) -> bool {
        self.mandatory_methods.iter().any(|m| m == name)
    }
}

#[cfg(test)]
mod tests {
    use super::Company;

    fn with_methods(methods: &[&str]) -> Company {
        let mut company = Company::with_id("c1", "Acme", 7);
        company.preferred_methods = methods.iter().map(|m| m.to_string()).collect();
        company
    }

    #[test]
    fn reorder_moves_item_forward_and_back() {
        let mut company = with_methods(&["Email", "Phone Call", "Other"]);
        assert!(company.reorder_preferred_method(0, 2));
        assert_eq!(company.preferred_methods, ["Phone Call", "Other", "Email"]);

        assert!(company.reorder_preferred_method(2, 0));
        assert_eq!(company.preferred_methods, ["Email", "Phone Call", "Other"]);
    }

    #[test]
    fn reorder_out_of_range_is_noop() {
        let mut company = with_methods(&["Email", "Other"]);
        assert!(!company.reorder_preferred_method(0, 2));
        assert!(!company.reorder_preferred_method(5, 0));
        assert_eq!(company.preferred_methods, ["Email", "Other"]);
    }

    #[test]
    fn toggle_mandatory_adds_then_removes() {
        let mut company = with_methods(&[]);
        assert!(company.toggle_mandatory_method("Email"));
        assert!(company.is_mandatory_method("Email"));
        assert!(!company.toggle_mandatory_method("Email"));
        assert!(company.mandatory_methods.is_empty());
    }
}
