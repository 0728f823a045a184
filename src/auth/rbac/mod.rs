//! Role-Based Access Control (RBAC) system
//!
//! Resolves the active role into per-module permission sets and answers
//! gating questions against them. Every check fails closed: unknown roles,
//! unknown modules and unresolved state all mean "no access".

mod capabilities;
pub mod defaults;
mod gate;
mod permissions;
mod registry;
mod resolver;
mod roles;
mod source;
mod store;
mod types;

// Re-export public types and structs
pub use capabilities::{CapabilityProjector, ModuleCapabilities, SpecificCapability};
pub use gate::{Fallback, GateState, GateWatcher, PermissionGate, RequireMode};
pub use permissions::PermissionQuery;
pub use registry::ModuleRegistry;
pub use resolver::PermissionResolver;
pub use roles::RolePermissionTable;
pub use source::{RoleSource, StaticRoleSource};
pub use store::{AcquisitionOutcome, AcquisitionTicket, PermissionStore};
pub use types::{
    ModuleGrant, PermissionCheck, PermissionSnapshot, PermissionState, ResolutionStatus, Role,
};
