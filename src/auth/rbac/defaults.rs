//! Built-in modules and roles for the ISP dashboard

use crate::config::models::{
    ModuleDefinition, ModuleGrantConfig, RoleConfig, SpecificPermission,
};

/// Default module definitions
pub fn default_modules() -> Vec<ModuleDefinition> {
    vec![
        ModuleDefinition::new("clients", "Clientes")
            .with_specific(SpecificPermission::new(
                "CHANGE_PLAN",
                "Cambiar plan",
                "Move a client to another service plan",
                "service",
            ))
            .with_specific(SpecificPermission::new(
                "SUSPEND_SERVICE",
                "Suspender servicio",
                "Suspend or reactivate a client's connection",
                "service",
            )),
        ModuleDefinition::new("payments", "Pagos")
            .with_specific(SpecificPermission::new(
                "VOID_PAYMENT",
                "Anular pago",
                "Void a registered payment",
                "billing",
            ))
            .with_specific(SpecificPermission::new(
                "EXPORT_REPORT",
                "Exportar reporte",
                "Export payment reports",
                "reports",
            )),
        ModuleDefinition::new("installations", "Instalaciones")
            .with_specific(SpecificPermission::new(
                "ASSIGN_TECHNICIAN",
                "Asignar técnico",
                "Assign a technician to an installation order",
                "operations",
            ))
            .with_specific(SpecificPermission::new(
                "CLOSE_ORDER",
                "Cerrar orden",
                "Mark an installation order as completed",
                "operations",
            )),
        ModuleDefinition::new("devices", "Dispositivos").with_specific(SpecificPermission::new(
            "REBOOT_DEVICE",
            "Reiniciar dispositivo",
            "Remotely reboot customer equipment",
            "operations",
        )),
        ModuleDefinition::new("employees", "Empleados").with_specific(SpecificPermission::new(
            "RESET_PASSWORD",
            "Restablecer contraseña",
            "Reset an employee's password",
            "security",
        )),
        ModuleDefinition::new("roles", "Roles y permisos").with_specific(
            SpecificPermission::new(
                "ASSIGN_PERMISSIONS",
                "Asignar permisos",
                "Edit the permissions attached to a role",
                "security",
            ),
        ),
        ModuleDefinition::new("settings", "Configuración de empresa"),
    ]
}

/// Default role definitions
pub fn default_roles() -> Vec<RoleConfig> {
    vec![
        RoleConfig {
            name: "Administrador".to_string(),
            description: "Full access to every module".to_string(),
            allow_all: true,
            is_system: true,
            grants: Vec::new(),
        },
        RoleConfig {
            name: "Operador".to_string(),
            description: "Front office: clients, payments and scheduling".to_string(),
            allow_all: false,
            is_system: true,
            grants: vec![
                grant(
                    "clients",
                    &["CREATE", "READ", "UPDATE", "DELETE", "VIEW_SUMMARY", "CHANGE_PLAN"],
                ),
                grant("payments", &["CREATE", "READ", "VIEW_SUMMARY"]),
                grant("installations", &["CREATE", "READ"]),
                grant("devices", &["READ"]),
            ],
        },
        RoleConfig {
            name: "Técnico".to_string(),
            description: "Field technician: installations and equipment".to_string(),
            allow_all: false,
            is_system: true,
            grants: vec![
                grant("clients", &["READ"]),
                grant("installations", &["READ", "UPDATE", "CLOSE_ORDER"]),
                grant("devices", &["READ", "UPDATE", "REBOOT_DEVICE"]),
            ],
        },
    ]
}

fn grant(module: &str, permissions: &[&str]) -> ModuleGrantConfig {
    ModuleGrantConfig {
        module: module.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}
