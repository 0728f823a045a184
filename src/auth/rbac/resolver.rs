//! Permission resolution: role name to permission state

use std::sync::Arc;
use tracing::debug;

use super::roles::RolePermissionTable;
use super::types::PermissionState;

/// Resolves role names against a shared role table
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    table: Arc<RolePermissionTable>,
}

impl PermissionResolver {
    pub fn new(table: Arc<RolePermissionTable>) -> Self {
        Self { table }
    }

    /// Group the role's grants by module
    ///
    /// Total and pure: an unknown role yields an empty state.
    pub fn resolve(&self, role_name: &str) -> PermissionState {
        let state: PermissionState = self.table.grants_for(role_name).into_iter().collect();

        if state.is_empty() && !self.table.contains(role_name) {
            debug!("Role '{}' is not in the table, resolving to no permissions", role_name);
        } else {
            debug!(
                "Resolved role '{}' to {} permissions across {} modules",
                role_name,
                state.permission_count(),
                state.modules().count()
            );
        }

        state
    }

    pub fn table(&self) -> &RolePermissionTable {
        &self.table
    }
}
