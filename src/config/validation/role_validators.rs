//! Role configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use std::collections::HashSet;

impl Validate for RolesConfig {
    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for role in &self.definitions {
            if !seen.insert(role.name.as_str()) {
                return Err(format!("Duplicate role definition: {}", role.name));
            }
            role.validate()?;
        }

        Ok(())
    }
}

impl Validate for RoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Role name cannot be empty".to_string());
        }

        // The role table is a mapping: one grant entry per module.
        let mut modules = HashSet::new();
        for grant in &self.grants {
            if grant.module.trim().is_empty() {
                return Err(format!("Role '{}' has a grant without module", self.name));
            }
            if !modules.insert(grant.module.as_str()) {
                return Err(format!(
                    "Role '{}' grants module '{}' more than once",
                    self.name, grant.module
                ));
            }
        }

        Ok(())
    }
}

/// Check that every grant points at a configured module and a permission it declares
pub fn validate_grants_against_modules(
    roles: &[RoleConfig],
    modules: &[ModuleDefinition],
) -> Result<(), String> {
    for role in roles {
        for grant in &role.grants {
            let module = modules
                .iter()
                .find(|m| m.id == grant.module)
                .ok_or_else(|| {
                    format!(
                        "Role '{}' grants unknown module '{}'",
                        role.name, grant.module
                    )
                })?;

            if let Some(undeclared) = grant.permissions.iter().find(|p| !module.declares(p)) {
                return Err(format!(
                    "Role '{}' grants '{}' which module '{}' does not declare",
                    role.name, undeclared, module.id
                ));
            }
        }
    }

    Ok(())
}
