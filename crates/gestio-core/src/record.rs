//! Permission records: the per-user document shape.
//!
//! The external document store keeps one record per user, holding a list of
//! `{module_id, capabilities}` entries. A module appears at most once per
//! record; an absent module is equivalent to an empty capability set.

use serde::{Deserialize, Serialize};

use crate::capability::CapabilitySet;
use crate::error::CoreError;
use crate::types::{ModuleId, UserId};

/// One module's capabilities inside a [`PermissionRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleGrant {
    /// The module this grant applies to.
    pub module_id: ModuleId,

    /// The capabilities granted on the module.
    pub capabilities: CapabilitySet,
}

impl ModuleGrant {
    /// Create a grant for a module.
    pub fn new(module_id: impl Into<ModuleId>, capabilities: CapabilitySet) -> Self {
        Self {
            module_id: module_id.into(),
            capabilities,
        }
    }
}

/// The per-user permission document persisted to the external store.
///
/// Keyed by `user_id` in the store. The in-memory matrix is loaded from and
/// flushed back to this shape at explicit load/save boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    /// The user this record belongs to.
    pub user_id: UserId,

    /// Per-module grants. Each module appears at most once.
    pub grants: Vec<ModuleGrant>,
}

impl PermissionRecord {
    /// Create an empty record for a user.
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            grants: Vec::new(),
        }
    }

    /// Add a module grant, builder-style.
    pub fn with_grant(mut self, module_id: impl Into<ModuleId>, capabilities: CapabilitySet) -> Self {
        self.grants.push(ModuleGrant::new(module_id, capabilities));
        self
    }

    /// Look up the capabilities for a module. Empty if absent.
    pub fn capabilities(&self, module_id: &ModuleId) -> CapabilitySet {
        self.grants
            .iter()
            .find(|g| &g.module_id == module_id)
            .map(|g| g.capabilities)
            .unwrap_or_default()
    }

    /// Validate the uniqueness invariant: a module appears at most once.
    pub fn check_unique_modules(&self) -> Result<(), CoreError> {
        for (i, grant) in self.grants.iter().enumerate() {
            if self.grants[..i].iter().any(|g| g.module_id == grant.module_id) {
                return Err(CoreError::DuplicateModule {
                    user: self.user_id.to_string(),
                    module: grant.module_id.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;

    #[test]
    fn test_capabilities_lookup() {
        let record = PermissionRecord::new("u1")
            .with_grant("employees", CapabilitySet::all_standard())
            .with_grant("salaries", CapabilitySet::from_iter([Capability::View]));

        let employees = record.capabilities(&ModuleId::from("employees"));
        assert!(employees.contains(Capability::Delete));

        let salaries = record.capabilities(&ModuleId::from("salaries"));
        assert!(salaries.contains(Capability::View));
        assert!(!salaries.contains(Capability::Edit));

        // absent module means all-false
        let garage = record.capabilities(&ModuleId::from("garage"));
        assert!(garage.is_empty());
    }

    #[test]
    fn test_duplicate_module_rejected() {
        let record = PermissionRecord::new("u1")
            .with_grant("employees", CapabilitySet::all_standard())
            .with_grant("employees", CapabilitySet::EMPTY);

        assert!(record.check_unique_modules().is_err());
    }

    #[test]
    fn test_record_json_shape() {
        let record = PermissionRecord::new("u1")
            .with_grant("employees", CapabilitySet::from_iter([Capability::View, Capability::Edit]));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["user_id"], "u1");
        assert_eq!(json["grants"][0]["module_id"], "employees");
        assert_eq!(json["grants"][0]["capabilities"][0], "view");

        let back: PermissionRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
