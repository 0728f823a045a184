//! Permission checking methods

use std::collections::BTreeSet;

use super::types::{PermissionCheck, PermissionSnapshot, PermissionState};

/// Boolean queries over resolved permissions
///
/// None of these fail: unknown modules, unknown permissions and unresolved
/// state all answer "no access".
pub trait PermissionQuery {
    /// With a module, whether that module grants `permission`; without one,
    /// whether any module does
    fn has_permission(&self, permission: &str, module: Option<&str>) -> bool;

    /// Granted permission ids for one module
    fn get_module_permissions(&self, module: &str) -> BTreeSet<String>;

    /// True if at least one permission is granted; an empty list is false
    fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S], module: Option<&str>) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(permission.as_ref(), module))
    }

    /// True if every permission is granted; an empty list is true
    fn has_all_permissions<S: AsRef<str>>(&self, permissions: &[S], module: Option<&str>) -> bool {
        permissions
            .iter()
            .all(|permission| self.has_permission(permission.as_ref(), module))
    }

    /// Detailed permission check
    fn check_permission(&self, permission: &str, module: Option<&str>) -> PermissionCheck {
        let granted = self.has_permission(permission, module);
        let denial_reason = (!granted).then(|| match module {
            Some(module) => format!("Missing permission: {}:{}", module, permission),
            None => format!("Missing permission: {}", permission),
        });

        PermissionCheck {
            granted,
            permission: permission.to_string(),
            module: module.map(str::to_string),
            denial_reason,
        }
    }
}

impl PermissionQuery for PermissionState {
    fn has_permission(&self, permission: &str, module: Option<&str>) -> bool {
        match module {
            Some(module) => self
                .module(module)
                .is_some_and(|permissions| permissions.contains(permission)),
            None => self
                .iter()
                .any(|(_, permissions)| permissions.contains(permission)),
        }
    }

    fn get_module_permissions(&self, module: &str) -> BTreeSet<String> {
        self.module(module).cloned().unwrap_or_default()
    }
}

impl PermissionQuery for PermissionSnapshot {
    fn has_permission(&self, permission: &str, module: Option<&str>) -> bool {
        self.is_resolved() && self.state().has_permission(permission, module)
    }

    fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S], module: Option<&str>) -> bool {
        self.is_resolved() && self.state().has_any_permission(permissions, module)
    }

    // Unresolved state answers false even for an empty requirement list.
    fn has_all_permissions<S: AsRef<str>>(&self, permissions: &[S], module: Option<&str>) -> bool {
        self.is_resolved() && self.state().has_all_permissions(permissions, module)
    }

    fn get_module_permissions(&self, module: &str) -> BTreeSet<String> {
        if !self.is_resolved() {
            return BTreeSet::new();
        }
        self.state().get_module_permissions(module)
    }

    fn check_permission(&self, permission: &str, module: Option<&str>) -> PermissionCheck {
        if self.is_resolved() {
            return self.state().check_permission(permission, module);
        }

        let reason = match self.unavailable_reason() {
            Some(reason) => reason.to_string(),
            None => "Permissions are still loading".to_string(),
        };
        PermissionCheck {
            granted: false,
            permission: permission.to_string(),
            module: module.map(str::to_string),
            denial_reason: Some(reason),
        }
    }
}
