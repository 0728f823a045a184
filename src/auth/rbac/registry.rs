//! Module registry: the static description of which permissions exist

use crate::config::models::{ModuleDefinition, ModulesConfig};
use crate::utils::error::{AccessError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Lookup of module definitions by id, preserving configuration order
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: Vec<ModuleDefinition>,
    index: HashMap<String, usize>,
}

impl ModuleRegistry {
    /// Build a registry, rejecting duplicate module ids
    pub fn new(modules: Vec<ModuleDefinition>) -> Result<Self> {
        let mut index = HashMap::with_capacity(modules.len());
        for (position, module) in modules.iter().enumerate() {
            if index.insert(module.id.clone(), position).is_some() {
                return Err(AccessError::config(format!(
                    "Duplicate module definition: {}",
                    module.id
                )));
            }
        }

        debug!("Registered {} modules", modules.len());
        Ok(Self { modules, index })
    }

    /// Registry of the built-in dashboard modules
    pub fn with_defaults() -> Result<Self> {
        Self::new(super::defaults::default_modules())
    }

    pub fn from_config(config: &ModulesConfig) -> Result<Self> {
        Self::new(config.effective())
    }

    /// Module definition by id
    pub fn get(&self, module: &str) -> Option<&ModuleDefinition> {
        self.index.get(module).map(|&position| &self.modules[position])
    }

    pub fn contains(&self, module: &str) -> bool {
        self.index.contains_key(module)
    }

    /// All modules in configuration order
    pub fn list(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
