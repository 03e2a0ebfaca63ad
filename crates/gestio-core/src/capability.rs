//! Capabilities: independent boolean permission flags.
//!
//! The four standard capabilities are view, create, edit, and delete. A few
//! modules of the application additionally carry export or modify, so the
//! capability space is an extensible set rather than four hardcoded fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One independent permission flag for a user on a module.
///
/// There are no transition rules or ordering constraints between
/// capabilities; each is toggled on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Read access to the module's screens and lists.
    View,
    /// Creating new documents in the module.
    Create,
    /// Editing existing documents.
    Edit,
    /// Deleting documents.
    Delete,
    /// Exporting module data (only some modules expose this).
    Export,
    /// Bulk modification (only some modules expose this).
    Modify,
}

impl Capability {
    /// The four standard capabilities every module carries.
    pub const STANDARD: [Capability; 4] = [
        Capability::View,
        Capability::Create,
        Capability::Edit,
        Capability::Delete,
    ];

    /// All known capabilities, in declaration order.
    pub const ALL: [Capability; 6] = [
        Capability::View,
        Capability::Create,
        Capability::Edit,
        Capability::Delete,
        Capability::Export,
        Capability::Modify,
    ];

    /// The capability's wire name, as stored in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::View => "view",
            Capability::Create => "create",
            Capability::Edit => "edit",
            Capability::Delete => "delete",
            Capability::Export => "export",
            Capability::Modify => "modify",
        }
    }

    /// Bit position used by [`CapabilitySet`].
    const fn bit(self) -> u8 {
        match self {
            Capability::View => 1 << 0,
            Capability::Create => 1 << 1,
            Capability::Edit => 1 << 2,
            Capability::Delete => 1 << 3,
            Capability::Export => 1 << 4,
            Capability::Modify => 1 << 5,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Capability {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Capability::View),
            "create" => Ok(Capability::Create),
            "edit" => Ok(Capability::Edit),
            "delete" => Ok(Capability::Delete),
            "export" => Ok(Capability::Export),
            "modify" => Ok(Capability::Modify),
            other => Err(CoreError::UnknownCapability(other.to_string())),
        }
    }
}

/// The set of capabilities a user holds on a module.
///
/// Backed by a small bitmask. The empty set is the default and is equivalent
/// to an absent permission entry: everything denied.
///
/// Serialized as a sorted list of capability names, which is the shape the
/// external document store carries.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// The empty set: every capability denied.
    pub const EMPTY: Self = Self(0);

    /// Create an empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// The set holding the four standard capabilities.
    pub fn all_standard() -> Self {
        let mut set = Self::new();
        for cap in Capability::STANDARD {
            set.insert(cap);
        }
        set
    }

    /// Build a set from an iterator of capabilities.
    pub fn from_iter(caps: impl IntoIterator<Item = Capability>) -> Self {
        let mut set = Self::new();
        for cap in caps {
            set.insert(cap);
        }
        set
    }

    /// Check whether the set holds a capability.
    pub const fn contains(&self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    /// Add a capability. Idempotent.
    pub fn insert(&mut self, cap: Capability) {
        self.0 |= cap.bit();
    }

    /// Remove a capability. Idempotent.
    pub fn remove(&mut self, cap: Capability) {
        self.0 &= !cap.bit();
    }

    /// Set one capability to an explicit value.
    pub fn set(&mut self, cap: Capability, value: bool) {
        if value {
            self.insert(cap);
        } else {
            self.remove(cap);
        }
    }

    /// Whether every capability is denied.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of granted capabilities.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over granted capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self::from_iter(iter)
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for CapabilitySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let caps = Vec::<Capability>::deserialize(deserializer)?;
        Ok(caps.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_set_denies_everything() {
        let set = CapabilitySet::new();
        for cap in Capability::ALL {
            assert!(!set.contains(cap));
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_all_standard() {
        let set = CapabilitySet::all_standard();
        assert!(set.contains(Capability::View));
        assert!(set.contains(Capability::Create));
        assert!(set.contains(Capability::Edit));
        assert!(set.contains(Capability::Delete));
        assert!(!set.contains(Capability::Export));
        assert!(!set.contains(Capability::Modify));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_set_and_remove() {
        let mut set = CapabilitySet::new();
        set.set(Capability::Edit, true);
        assert!(set.contains(Capability::Edit));
        // edit without view is accepted, no transition rules
        assert!(!set.contains(Capability::View));

        set.set(Capability::Edit, false);
        assert!(set.is_empty());
    }

    #[test]
    fn test_serde_as_name_list() {
        let set = CapabilitySet::from_iter([Capability::View, Capability::Export]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"view\",\"export\"]");

        let back: CapabilitySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_capability_from_str() {
        assert_eq!("delete".parse::<Capability>().unwrap(), Capability::Delete);
        assert!("superuser".parse::<Capability>().is_err());
    }

    proptest! {
        #[test]
        fn prop_insert_then_remove_roundtrips(bits in 0u8..64) {
            let before = CapabilitySet(bits);
            for cap in Capability::ALL {
                let had = before.contains(cap);
                let mut set = before;
                set.insert(cap);
                set.set(cap, had);
                prop_assert_eq!(set, before);
            }
        }
    }
}
