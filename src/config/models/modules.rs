//! Module configuration: which permissions exist per dashboard module

use serde::{Deserialize, Serialize};
use std::fmt;

/// Module configuration set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// Start from the built-in modules before applying `definitions`
    #[serde(default = "super::default_true")]
    pub include_defaults: bool,
    /// Module definitions; a definition replaces a built-in module of the same id
    #[serde(default)]
    pub definitions: Vec<ModuleDefinition>,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            definitions: Vec::new(),
        }
    }
}

impl ModulesConfig {
    /// Modules after layering `definitions` over the built-in set
    pub fn effective(&self) -> Vec<ModuleDefinition> {
        let mut modules = if self.include_defaults {
            crate::auth::rbac::defaults::default_modules()
        } else {
            Vec::new()
        };

        for definition in &self.definitions {
            match modules.iter_mut().find(|m| m.id == definition.id) {
                Some(existing) => *existing = definition.clone(),
                None => modules.push(definition.clone()),
            }
        }

        modules
    }
}

/// Static description of one module's permissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Module identifier, e.g. `payments`
    pub id: String,
    /// Human readable name
    pub display_name: String,
    /// Base permissions the module supports, in display order
    #[serde(default = "default_base_permissions")]
    pub base_permissions: Vec<BasePermission>,
    /// Module specific permissions, in display order
    #[serde(default)]
    pub specific_permissions: Vec<SpecificPermission>,
}

impl ModuleDefinition {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            base_permissions: default_base_permissions(),
            specific_permissions: Vec::new(),
        }
    }

    pub fn with_specific(mut self, permission: SpecificPermission) -> Self {
        self.specific_permissions.push(permission);
        self
    }

    /// Whether `permission` is a base or specific permission of this module
    pub fn declares(&self, permission: &str) -> bool {
        self.base_permissions.iter().any(|b| b.as_str() == permission)
            || self.specific_permissions.iter().any(|s| s.id == permission)
    }

    /// Every declared permission id: base permissions first, then specific ones
    pub fn permission_ids(&self) -> Vec<String> {
        self.base_permissions
            .iter()
            .map(|b| b.as_str().to_string())
            .chain(self.specific_permissions.iter().map(|s| s.id.clone()))
            .collect()
    }
}

/// A module specific permission descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificPermission {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl SpecificPermission {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// The base permission kinds every module may expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BasePermission {
    #[serde(rename = "CREATE")]
    Create,
    #[serde(rename = "READ")]
    Read,
    #[serde(rename = "UPDATE")]
    Update,
    #[serde(rename = "DELETE")]
    Delete,
    #[serde(rename = "VIEW_SUMMARY")]
    ViewSummary,
}

impl BasePermission {
    pub const ALL: [BasePermission; 5] = [
        BasePermission::Create,
        BasePermission::Read,
        BasePermission::Update,
        BasePermission::Delete,
        BasePermission::ViewSummary,
    ];

    /// Permission identifier as granted in the role table
    pub fn as_str(&self) -> &'static str {
        match self {
            BasePermission::Create => "CREATE",
            BasePermission::Read => "READ",
            BasePermission::Update => "UPDATE",
            BasePermission::Delete => "DELETE",
            BasePermission::ViewSummary => "VIEW_SUMMARY",
        }
    }
}

impl fmt::Display for BasePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_base_permissions() -> Vec<BasePermission> {
    BasePermission::ALL.to_vec()
}
