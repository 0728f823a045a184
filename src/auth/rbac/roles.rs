//! Role permission table

use crate::config::models::{RoleConfig, RolesConfig};
use crate::utils::error::{AccessError, Result};
use std::collections::HashMap;
use tracing::{debug, info};

use super::registry::ModuleRegistry;
use super::types::{ModuleGrant, Role};

/// Read-only mapping from role name to its module grants
#[derive(Debug, Clone, Default)]
pub struct RolePermissionTable {
    roles: HashMap<String, Role>,
}

impl RolePermissionTable {
    /// Empty table; every role resolves to no permissions
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the built-in roles
    pub fn with_defaults(registry: &ModuleRegistry) -> Result<Self> {
        Self::from_roles(&super::defaults::default_roles(), registry)
    }

    /// Build the table from configuration
    pub fn from_config(config: &RolesConfig, registry: &ModuleRegistry) -> Result<Self> {
        Self::from_roles(&config.effective(), registry)
    }

    /// Build the table from role definitions
    ///
    /// `allow_all` roles are expanded here into explicit grants for every
    /// permission of every registered module, so resolution stays a flat lookup.
    pub fn from_roles(definitions: &[RoleConfig], registry: &ModuleRegistry) -> Result<Self> {
        info!("Building role permission table");

        let mut table = Self::new();
        for definition in definitions {
            if table.roles.contains_key(&definition.name) {
                return Err(AccessError::config(format!(
                    "Duplicate role definition: {}",
                    definition.name
                )));
            }

            let role = Self::build_role(definition, registry)?;
            table.roles.insert(role.name.clone(), role);
        }

        debug!("Loaded {} roles", table.roles.len());
        Ok(table)
    }

    fn build_role(definition: &RoleConfig, registry: &ModuleRegistry) -> Result<Role> {
        let mut role = Role::new(&definition.name, &definition.description);
        if definition.is_system {
            role = role.system();
        }

        if definition.allow_all {
            for module in registry.list() {
                role = role.with_grant(ModuleGrant::new(&module.id, module.permission_ids()))?;
            }
            // Explicit grants on an allow_all role only matter for modules
            // outside the registry.
            for grant in &definition.grants {
                if !registry.contains(&grant.module) {
                    role = role
                        .with_grant(ModuleGrant::new(&grant.module, grant.permissions.clone()))?;
                }
            }
            return Ok(role);
        }

        for grant in &definition.grants {
            role = role.with_grant(ModuleGrant::new(&grant.module, grant.permissions.clone()))?;
        }
        Ok(role)
    }

    /// `(module, permission)` pairs granted to `role_name`; empty for unknown roles
    pub fn grants_for(&self, role_name: &str) -> Vec<(String, String)> {
        self.roles
            .get(role_name)
            .map(|role| {
                role.grants()
                    .map(|(module, permission)| (module.to_string(), permission.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get role by name
    pub fn get_role(&self, role_name: &str) -> Option<&Role> {
        self.roles.get(role_name)
    }

    pub fn contains(&self, role_name: &str) -> bool {
        self.roles.contains_key(role_name)
    }

    /// List all roles, sorted by name
    pub fn list_roles(&self) -> Vec<&Role> {
        let mut roles: Vec<&Role> = self.roles.values().collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        roles
    }

    /// Add custom role, replacing a non-system role of the same name
    pub fn add_role(&mut self, role: Role) -> Result<()> {
        if role.is_system {
            return Err(AccessError::authorization("Cannot add system roles at runtime"));
        }
        if self.roles.get(&role.name).is_some_and(|r| r.is_system) {
            return Err(AccessError::authorization("Cannot modify system roles"));
        }

        self.roles.insert(role.name.clone(), role);
        Ok(())
    }
}
