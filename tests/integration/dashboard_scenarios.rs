//! Dashboard scenarios
//!
//! Role switches and gated UI elements exercised through the public API.

#[cfg(test)]
mod tests {
    use crate::common::*;
    use access_gate::{
        AcquisitionOutcome, Fallback, GateState, PermissionGate, PermissionQuery,
        StaticRoleSource,
    };

    // ==================== Payments ====================

    #[test]
    fn test_admin_can_void_payment() {
        let store = store_with_role("Administrador");
        assert!(store.snapshot().has_permission("VOID_PAYMENT", Some("payments")));
    }

    #[test]
    fn test_operator_sees_fallback_for_void_payment() {
        let store = store_with_role("Operador");
        let snapshot = store.snapshot();

        assert!(!snapshot.has_permission("VOID_PAYMENT", Some("payments")));

        let gate = PermissionGate::new("VOID_PAYMENT").module("payments");
        assert_eq!(
            gate.render(&snapshot, "Anular", Fallback::Content("Sin permiso")),
            Some("Sin permiso")
        );
    }

    #[tokio::test]
    async fn test_switching_to_technician_hides_payment_delete() {
        let store = store_with_role("Administrador");

        let mut delete_button = PermissionGate::new("DELETE").module("payments").watch(&store);
        let mut bulk_delete = PermissionGate::new("DELETE")
            .module("payments")
            .all_of(["DELETE", "READ"])
            .watch(&store);

        assert_eq!(delete_button.current(), GateState::Granted);
        assert_eq!(bulk_delete.current(), GateState::Granted);

        store.set_active_role("Técnico");

        assert_eq!(delete_button.changed().await, Some(GateState::Denied));
        assert_eq!(bulk_delete.changed().await, Some(GateState::Denied));
        assert_eq!(delete_button.render("Eliminar", Fallback::Nothing), None);
    }

    // ==================== Clients ====================

    #[test]
    fn test_any_and_all_on_read_only_role() {
        let store = store_from_yaml(READ_ONLY_CLIENTS_YAML);
        store.set_active_role("Consulta");
        let snapshot = store.snapshot();

        assert!(snapshot.has_any_permission(&["READ", "CREATE"], Some("clients")));
        assert!(!snapshot.has_all_permissions(&["READ", "CREATE"], Some("clients")));
    }

    #[test]
    fn test_unknown_role_sees_nothing() {
        let store = store_with_role("Invitado");
        let snapshot = store.snapshot();

        for module in store.registry().list() {
            let capabilities = store.capabilities(&module.id);
            assert!(capabilities.configured);
            assert!(!capabilities.any_granted(), "{}", module.id);
            for permission in module.permission_ids() {
                assert!(!snapshot.has_permission(&permission, Some(&module.id)));
            }
        }
    }

    #[test]
    fn test_unconfigured_module_capabilities() {
        let store = store_with_role("Administrador");
        let capabilities = store.capabilities("inventory");

        assert!(!capabilities.configured);
        assert!(!capabilities.can_read);
        assert!(capabilities.specific.is_empty());
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_gate_stays_pending_until_role_arrives() {
        let store = default_store();
        let mut gate = PermissionGate::new("READ").module("clients").watch(&store);

        assert_eq!(gate.current(), GateState::Pending);
        assert_eq!(gate.render("Clientes", Fallback::Nothing), None);

        let outcome = store.acquire_role(&StaticRoleSource::new("Operador")).await;
        assert_eq!(outcome, AcquisitionOutcome::Applied);
        assert_eq!(gate.changed().await, Some(GateState::Granted));
        assert_eq!(gate.render("Clientes", Fallback::Nothing), Some("Clientes"));
    }
}
