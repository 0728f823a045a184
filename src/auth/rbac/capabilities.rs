//! Per-module capability flags derived from permission queries

use serde::Serialize;

use crate::config::models::BasePermission;
use crate::utils::error::Result;

use super::permissions::PermissionQuery;
use super::registry::ModuleRegistry;

/// Capability flags for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleCapabilities {
    pub module: String,
    /// False when the module has no definition; every flag is then false
    pub configured: bool,
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
    pub can_view_summary: bool,
    /// One entry per specific permission, in configuration order
    pub specific: Vec<SpecificCapability>,
}

/// Outcome for one module specific permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecificCapability {
    pub id: String,
    pub name: String,
    pub category: String,
    pub granted: bool,
}

impl ModuleCapabilities {
    /// Result for a module without a definition
    pub fn unconfigured(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            configured: false,
            can_create: false,
            can_read: false,
            can_update: false,
            can_delete: false,
            can_view_summary: false,
            specific: Vec::new(),
        }
    }

    /// Flag for a base permission
    pub fn base(&self, permission: BasePermission) -> bool {
        match permission {
            BasePermission::Create => self.can_create,
            BasePermission::Read => self.can_read,
            BasePermission::Update => self.can_update,
            BasePermission::Delete => self.can_delete,
            BasePermission::ViewSummary => self.can_view_summary,
        }
    }

    /// Flag by permission id, base or specific; unknown ids are false
    pub fn can(&self, permission: &str) -> bool {
        if let Some(base) = BasePermission::ALL.iter().find(|b| b.as_str() == permission) {
            return self.base(*base);
        }
        self.specific
            .iter()
            .any(|capability| capability.id == permission && capability.granted)
    }

    pub fn any_granted(&self) -> bool {
        BasePermission::ALL.iter().any(|b| self.base(*b))
            || self.specific.iter().any(|capability| capability.granted)
    }
}

/// Projects module definitions onto a permission query
pub struct CapabilityProjector;

impl CapabilityProjector {
    /// Capability flags for `module`
    ///
    /// Base kinds the module does not list are false even if granted.
    pub fn project<Q: PermissionQuery>(
        query: &Q,
        registry: &ModuleRegistry,
        module: &str,
    ) -> ModuleCapabilities {
        let Some(definition) = registry.get(module) else {
            return ModuleCapabilities::unconfigured(module);
        };

        let flag = |base: BasePermission| {
            definition.base_permissions.contains(&base)
                && query.has_permission(base.as_str(), Some(module))
        };

        ModuleCapabilities {
            module: module.to_string(),
            configured: true,
            can_create: flag(BasePermission::Create),
            can_read: flag(BasePermission::Read),
            can_update: flag(BasePermission::Update),
            can_delete: flag(BasePermission::Delete),
            can_view_summary: flag(BasePermission::ViewSummary),
            specific: definition
                .specific_permissions
                .iter()
                .map(|permission| SpecificCapability {
                    id: permission.id.clone(),
                    name: permission.name.clone(),
                    category: permission.category.clone(),
                    granted: query.has_permission(&permission.id, Some(module)),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON listing of projected capabilities
    pub fn to_json(capabilities: &[ModuleCapabilities]) -> Result<String> {
        Ok(serde_json::to_string_pretty(capabilities)?)
    }

    /// Capability flags for every registered module, in configuration order
    pub fn project_all<Q: PermissionQuery>(
        query: &Q,
        registry: &ModuleRegistry,
    ) -> Vec<ModuleCapabilities> {
        registry
            .list()
            .iter()
            .map(|definition| Self::project(query, registry, &definition.id))
            .collect()
    }
}
