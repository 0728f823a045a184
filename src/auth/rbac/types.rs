//! RBAC type definitions

use crate::utils::error::{AccessError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Role definition
///
/// A role is immutable once loaded into the table; switching the active role
/// replaces the resolved state wholesale instead of editing a role in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Role name
    pub name: String,
    /// Role description
    pub description: String,
    /// Whether this is a system role
    pub is_system: bool,
    /// Module id to granted permission ids
    grants: BTreeMap<String, BTreeSet<String>>,
}

impl Role {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_system: false,
            grants: BTreeMap::new(),
        }
    }

    /// Mark the role as a system role
    pub fn system(mut self) -> Self {
        self.is_system = true;
        self
    }

    /// Add the grant for one module; a second grant for the same module is rejected
    pub fn with_grant(mut self, grant: ModuleGrant) -> Result<Self> {
        if self.grants.contains_key(&grant.module) {
            return Err(AccessError::validation(format!(
                "Role '{}' already has a grant for module '{}'",
                self.name, grant.module
            )));
        }

        self.grants.insert(grant.module, grant.permissions);
        Ok(self)
    }

    /// Granted permissions for one module
    pub fn module_grant(&self, module: &str) -> Option<&BTreeSet<String>> {
        self.grants.get(module)
    }

    /// Flattened `(module, permission)` pairs
    pub fn grants(&self) -> impl Iterator<Item = (&str, &str)> {
        self.grants.iter().flat_map(|(module, permissions)| {
            permissions
                .iter()
                .map(move |permission| (module.as_str(), permission.as_str()))
        })
    }
}

/// Permissions granted to a role within one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrant {
    pub module: String,
    pub permissions: BTreeSet<String>,
}

impl ModuleGrant {
    pub fn new<I, S>(module: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            module: module.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Resolved permissions: module id to the set of granted permission ids
///
/// Ordered collections keep two resolutions of the same role identical,
/// including their serialized form. Modules never map to an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionState {
    modules: BTreeMap<String, BTreeSet<String>>,
}

impl PermissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Granted permissions for `module`, if any
    pub fn module(&self, module: &str) -> Option<&BTreeSet<String>> {
        self.modules.get(module)
    }

    /// Module ids with at least one grant
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Iterate over every module's grant set
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.modules.iter().map(|(m, p)| (m.as_str(), p))
    }

    /// Total number of `(module, permission)` grants
    pub fn permission_count(&self) -> usize {
        self.modules.values().map(BTreeSet::len).sum()
    }

    pub(crate) fn grant(&mut self, module: &str, permission: &str) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(permission.to_string());
    }

    pub(crate) fn revoke(&mut self, module: &str, permission: &str) {
        if let Some(permissions) = self.modules.get_mut(module) {
            permissions.remove(permission);
            if permissions.is_empty() {
                self.modules.remove(module);
            }
        }
    }
}

impl<M, P> FromIterator<(M, P)> for PermissionState
where
    M: AsRef<str>,
    P: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (M, P)>>(iter: T) -> Self {
        let mut state = PermissionState::new();
        for (module, permission) in iter {
            state.grant(module.as_ref(), permission.as_ref());
        }
        state
    }
}

/// Where the active role stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// No role has been resolved yet, or a new acquisition is in flight
    Pending,
    /// Permissions were resolved for `role`
    Resolved { role: String },
    /// Role acquisition failed; treated as an empty grant set
    Failed { reason: String },
}

/// An immutable view of the active permissions, published atomically
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionSnapshot {
    pub(crate) status: ResolutionStatus,
    pub(crate) state: PermissionState,
    pub(crate) unavailable: Option<String>,
    pub(crate) revision: u64,
}

impl PermissionSnapshot {
    pub fn pending() -> Self {
        Self {
            status: ResolutionStatus::Pending,
            state: PermissionState::new(),
            unavailable: None,
            revision: 0,
        }
    }

    pub fn resolved(role: impl Into<String>, state: PermissionState) -> Self {
        Self {
            status: ResolutionStatus::Resolved { role: role.into() },
            state,
            unavailable: None,
            revision: 0,
        }
    }

    /// A failed acquisition, fail closed with no grants
    pub fn failed(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            status: ResolutionStatus::Failed {
                reason: reason.clone(),
            },
            state: PermissionState::new(),
            unavailable: Some(reason),
            revision: 0,
        }
    }

    /// Still pending, but the last acquisition attempt failed
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::pending()
        }
    }

    pub fn status(&self) -> &ResolutionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, ResolutionStatus::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.status, ResolutionStatus::Resolved { .. })
    }

    /// Active role name once resolved
    pub fn role(&self) -> Option<&str> {
        match &self.status {
            ResolutionStatus::Resolved { role } => Some(role),
            _ => None,
        }
    }

    /// Resolved grants; empty unless the status is `Resolved`
    pub fn state(&self) -> &PermissionState {
        &self.state
    }

    /// User facing reason when protected content cannot be shown
    pub fn unavailable_reason(&self) -> Option<&str> {
        self.unavailable.as_deref()
    }

    /// Monotonic publish counter assigned by the store
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Permission that was checked
    pub permission: String,
    /// Module scope of the check, `None` for a cross-module check
    pub module: Option<String>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
