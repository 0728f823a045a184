//! Module configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use std::collections::HashSet;

impl Validate for ModulesConfig {
    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for module in &self.definitions {
            if !seen.insert(module.id.as_str()) {
                return Err(format!("Duplicate module definition: {}", module.id));
            }
            module.validate()?;
        }

        Ok(())
    }
}

impl Validate for ModuleDefinition {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Module id cannot be empty".to_string());
        }

        if self.display_name.trim().is_empty() {
            return Err(format!("Module '{}' must have a display name", self.id));
        }

        let mut base = HashSet::new();
        for permission in &self.base_permissions {
            if !base.insert(*permission) {
                return Err(format!(
                    "Module '{}' lists base permission {} twice",
                    self.id, permission
                ));
            }
        }

        let mut specific = HashSet::new();
        for permission in &self.specific_permissions {
            if permission.id.trim().is_empty() {
                return Err(format!("Module '{}' has a specific permission without id", self.id));
            }
            if BasePermission::ALL.iter().any(|b| b.as_str() == permission.id) {
                return Err(format!(
                    "Module '{}' redeclares base permission {} as specific",
                    self.id, permission.id
                ));
            }
            if !specific.insert(permission.id.as_str()) {
                return Err(format!(
                    "Module '{}' lists specific permission {} twice",
                    self.id, permission.id
                ));
            }
        }

        Ok(())
    }
}
