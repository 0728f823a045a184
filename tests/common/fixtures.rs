//! Test fixtures and factories

use access_gate::{Config, PermissionStore};
use std::sync::Arc;

/// Store over the built-in roles and modules, still pending
pub fn default_store() -> Arc<PermissionStore> {
    Arc::new(PermissionStore::from_config(&Config::default()).expect("default config is valid"))
}

/// Store with `role` already active
pub fn store_with_role(role: &str) -> Arc<PermissionStore> {
    let store = default_store();
    store.set_active_role(role);
    store
}

/// Store built from a YAML document
pub fn store_from_yaml(yaml: &str) -> Arc<PermissionStore> {
    let config = Config::from_yaml_str(yaml).expect("fixture config is valid");
    Arc::new(PermissionStore::from_config(&config).expect("fixture store builds"))
}

/// Role with only READ on clients, layered over the built-in table
pub const READ_ONLY_CLIENTS_YAML: &str = r#"
roles:
  definitions:
    - name: "Consulta"
      description: "Can look up clients"
      grants:
        - module: "clients"
          permissions: ["READ"]
"#;
