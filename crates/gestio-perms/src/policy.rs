//! Access policies: permission checks as a composable trait.
//!
//! The administrator override is a decorator over the base check, keeping
//! the override policy swappable instead of branching inside the matrix.

use gestio_core::{Capability, ModuleId, UserId};

use crate::matrix::PermissionMatrix;

/// A permission-check function: may this user do this on this module?
pub trait AccessPolicy {
    /// Whether the user holds the capability on the module.
    fn is_granted(&self, user: &UserId, module: &ModuleId, cap: Capability) -> bool;
}

impl AccessPolicy for PermissionMatrix {
    fn is_granted(&self, user: &UserId, module: &ModuleId, cap: Capability) -> bool {
        PermissionMatrix::is_granted(self, user, module, cap)
    }
}

impl<P: AccessPolicy + ?Sized> AccessPolicy for &P {
    fn is_granted(&self, user: &UserId, module: &ModuleId, cap: Capability) -> bool {
        (**self).is_granted(user, module, cap)
    }
}

/// Decorator that short-circuits checks for administrators.
///
/// The administrator flag is externally owned: the wrapped predicate is
/// consulted on every check, and when it returns true the stored entries
/// are ignored entirely.
pub struct AdminOverride<P, F> {
    inner: P,
    is_admin: F,
}

impl<P, F> AdminOverride<P, F>
where
    P: AccessPolicy,
    F: Fn(&UserId) -> bool,
{
    /// Wrap a policy with an administrator predicate.
    pub fn new(inner: P, is_admin: F) -> Self {
        Self { inner, is_admin }
    }

    /// The wrapped policy.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P, F> AccessPolicy for AdminOverride<P, F>
where
    P: AccessPolicy,
    F: Fn(&UserId) -> bool,
{
    fn is_granted(&self, user: &UserId, module: &ModuleId, cap: Capability) -> bool {
        if (self.is_admin)(user) {
            return true;
        }
        self.inner.is_granted(user, module, cap)
    }
}
