//! # access-gate
//!
//! Role and permission resolution for admin dashboards, with fail-closed
//! gating of protected content.
//!
//! ## Features
//!
//! - **Role table**: role name to per-module permission grants, loaded from YAML
//!   or the built-in ISP roles
//! - **Resolver**: deterministic role to permission-state resolution
//! - **Queries**: single, any-of and all-of checks, module scoped or cross-module
//! - **Capabilities**: create/read/update/delete/summary and module specific flags
//! - **Gates**: Pending/Granted/Denied decisions that re-evaluate on every change
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use access_gate::{Config, PermissionGate, PermissionStore, StaticRoleSource};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/access.example.yaml").await?;
//!     let store = Arc::new(PermissionStore::from_config(&config)?);
//!
//!     let mut gate = PermissionGate::new("VOID_PAYMENT")
//!         .module("payments")
//!         .watch(&store);
//!
//!     store.acquire_role(&StaticRoleSource::new("Administrador")).await;
//!     println!("void button: {:?}", gate.current());
//!
//!     store.set_active_role("Técnico");
//!     println!("void button: {:?}", gate.changed().await);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    AcquisitionOutcome, CapabilityProjector, Fallback, GateState, GateWatcher,
    ModuleCapabilities, ModuleRegistry, PermissionGate, PermissionQuery, PermissionResolver,
    PermissionSnapshot, PermissionState, PermissionStore, RolePermissionTable, RoleSource,
    StaticRoleSource,
};
pub use config::Config;
pub use utils::error::{AccessError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
