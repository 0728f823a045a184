//! Role table configuration

use serde::{Deserialize, Serialize};

/// Role table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesConfig {
    /// Start from the built-in roles before applying `definitions`
    #[serde(default = "super::default_true")]
    pub include_defaults: bool,
    /// Role definitions; a definition replaces a built-in role of the same name
    #[serde(default)]
    pub definitions: Vec<RoleConfig>,
}

impl Default for RolesConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            definitions: Vec::new(),
        }
    }
}

impl RolesConfig {
    /// Roles after layering `definitions` over the built-in set
    pub fn effective(&self) -> Vec<RoleConfig> {
        let mut roles = if self.include_defaults {
            crate::auth::rbac::defaults::default_roles()
        } else {
            Vec::new()
        };

        for definition in &self.definitions {
            match roles.iter_mut().find(|r| r.name == definition.name) {
                Some(existing) => *existing = definition.clone(),
                None => roles.push(definition.clone()),
            }
        }

        roles
    }
}

/// A single role definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfig {
    /// Role name, the identity used by `set_active_role`
    pub name: String,
    /// Role description
    #[serde(default)]
    pub description: String,
    /// Grant every permission of every configured module
    #[serde(default)]
    pub allow_all: bool,
    /// Whether the role is protected from replacement at runtime
    #[serde(default)]
    pub is_system: bool,
    /// Per-module grants, at most one entry per module
    #[serde(default)]
    pub grants: Vec<ModuleGrantConfig>,
}

/// Permissions granted to a role within one module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleGrantConfig {
    pub module: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}
