//! Configuration file integration tests

#[cfg(test)]
mod tests {
    use access_gate::{Config, PermissionQuery, PermissionStore};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_example_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/access.example.yaml");
        let config = Config::from_file(path).await.unwrap();

        let store = PermissionStore::from_config(&config).unwrap();
        store.set_active_role("Supervisor");
        let snapshot = store.snapshot();

        assert!(snapshot.has_permission("EXPORT_PDF", Some("reports")));
        assert!(!snapshot.has_permission("DELETE", Some("payments")));

        let reports = store.capabilities("reports");
        assert!(reports.can_read);
        assert!(!reports.can_create);
    }

    #[tokio::test]
    async fn test_custom_table_without_defaults() {
        let yaml = r#"
modules:
  include_defaults: false
  definitions:
    - id: "tickets"
      display_name: "Tickets"
roles:
  include_defaults: false
  definitions:
    - name: "Soporte"
      grants:
        - module: "tickets"
          permissions: ["READ", "UPDATE"]
    - name: "Jefe"
      allow_all: true
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let store = PermissionStore::from_config(&config).unwrap();

        assert!(store.get_module_config("payments").is_none());

        store.set_active_role("Administrador");
        assert!(!store.snapshot().has_permission("READ", None));

        store.set_active_role("Jefe");
        assert!(store.snapshot().has_permission("DELETE", Some("tickets")));

        store.set_active_role("Soporte");
        assert!(store.capabilities("tickets").can_update);
        assert!(!store.capabilities("tickets").can_delete);
    }

    #[test]
    fn test_duplicate_module_grant_in_file_is_rejected() {
        let yaml = r#"
roles:
  definitions:
    - name: "Cajero"
      grants:
        - module: "payments"
          permissions: ["READ"]
        - module: "payments"
          permissions: ["CREATE"]
"#;
        let err = Config::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_default_role_from_config() {
        let yaml = r#"
access:
  default_role: "Técnico"
"#;
        let config = Config::from_yaml_str(yaml).unwrap();
        let store = PermissionStore::from_config(&config).unwrap();

        assert_eq!(store.snapshot().role(), Some("Técnico"));
    }
}
