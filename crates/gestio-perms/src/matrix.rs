//! The in-memory permission matrix.

use std::collections::{BTreeSet, HashMap};

use gestio_core::{Capability, CapabilitySet, ModuleId, PermissionRecord, UserId};

use crate::error::Result;

/// A keyed collection of `(user, module) -> capabilities` entries.
///
/// Owned by whatever administrative session is editing it. Persistence is
/// an external collaborator: the matrix only tracks which users have
/// unsaved changes.
///
/// Entries that become empty are pruned, since an absent entry already
/// means everything denied.
#[derive(Debug, Default)]
pub struct PermissionMatrix {
    /// Capability sets keyed by user and module.
    entries: HashMap<(UserId, ModuleId), CapabilitySet>,

    /// Users whose modules were loaded or touched. Enumerable for bulk
    /// administration views.
    users: BTreeSet<UserId>,

    /// Users with unsaved mutations.
    dirty: BTreeSet<UserId>,
}

impl PermissionMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// The capabilities a user holds on a module. Empty if never touched.
    pub fn get(&self, user: &UserId, module: &ModuleId) -> CapabilitySet {
        self.entries
            .get(&(user.clone(), module.clone()))
            .copied()
            .unwrap_or_default()
    }

    /// Convenience single-capability read.
    pub fn is_granted(&self, user: &UserId, module: &ModuleId, cap: Capability) -> bool {
        self.get(user, module).contains(cap)
    }

    /// All users known to the matrix, sorted.
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.users.iter()
    }

    /// The modules a user has non-empty entries for, sorted.
    pub fn modules_for(&self, user: &UserId) -> Vec<ModuleId> {
        let mut modules: Vec<ModuleId> = self
            .entries
            .keys()
            .filter(|(u, _)| u == user)
            .map(|(_, m)| m.clone())
            .collect();
        modules.sort();
        modules
    }

    /// Users with unsaved mutations, sorted.
    pub fn dirty_users(&self) -> impl Iterator<Item = &UserId> {
        self.dirty.iter()
    }

    /// Whether a user has unsaved mutations.
    pub fn is_dirty(&self, user: &UserId) -> bool {
        self.dirty.contains(user)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Toggle exactly one capability. Idempotent.
    pub fn set_capability(
        &mut self,
        user: &UserId,
        module: &ModuleId,
        cap: Capability,
        value: bool,
    ) {
        let mut set = self.get(user, module);
        set.set(cap, value);
        self.put(user, module, set);
    }

    /// Set the four standard capabilities to the same value in one
    /// observable transition.
    pub fn set_all(&mut self, user: &UserId, module: &ModuleId, value: bool) {
        let mut set = self.get(user, module);
        for cap in Capability::STANDARD {
            set.set(cap, value);
        }
        self.put(user, module, set);
    }

    /// Replace a whole entry.
    pub fn set_capabilities(&mut self, user: &UserId, module: &ModuleId, set: CapabilitySet) {
        self.put(user, module, set);
    }

    fn put(&mut self, user: &UserId, module: &ModuleId, set: CapabilitySet) {
        let key = (user.clone(), module.clone());
        if set.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, set);
        }
        self.users.insert(user.clone());
        self.dirty.insert(user.clone());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Record conversion (load/save boundaries)
    // ─────────────────────────────────────────────────────────────────────────

    /// Load a persisted record, replacing the user's entries.
    ///
    /// Clears the user's dirty mark: the matrix now mirrors the store.
    /// Fails if the record carries the same module twice.
    pub fn apply_record(&mut self, record: &PermissionRecord) -> Result<()> {
        record.check_unique_modules().map_err(crate::PermsError::Core)?;

        self.entries.retain(|(u, _), _| u != &record.user_id);
        for grant in &record.grants {
            if !grant.capabilities.is_empty() {
                self.entries.insert(
                    (record.user_id.clone(), grant.module_id.clone()),
                    grant.capabilities,
                );
            }
        }

        self.users.insert(record.user_id.clone());
        self.dirty.remove(&record.user_id);
        Ok(())
    }

    /// Register a user with no stored record (all-false everywhere).
    pub fn apply_missing(&mut self, user: &UserId) {
        self.entries.retain(|(u, _), _| u != user);
        self.users.insert(user.clone());
        self.dirty.remove(user);
    }

    /// Build the persistable record for a user, modules sorted.
    pub fn record_for(&self, user: &UserId) -> PermissionRecord {
        let mut record = PermissionRecord::new(user.clone());
        for module in self.modules_for(user) {
            let set = self.get(user, &module);
            record = record.with_grant(module, set);
        }
        record
    }

    /// Drop a user's dirty mark after a successful save.
    pub fn mark_clean(&mut self, user: &UserId) {
        self.dirty.remove(user);
    }
}
