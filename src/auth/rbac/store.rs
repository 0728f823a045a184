//! Permission store: the single owner of the active permission snapshot

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::models::{AccessConfig, AcquisitionFailurePolicy, ModuleDefinition};
use crate::utils::error::{AccessError, Result};

use super::capabilities::{CapabilityProjector, ModuleCapabilities};
use super::registry::ModuleRegistry;
use super::resolver::PermissionResolver;
use super::source::RoleSource;
use super::types::PermissionSnapshot;

/// Handle for one in-flight role acquisition
///
/// Consumed by [`PermissionStore::complete_acquisition`]; a generation can be
/// applied at most once.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(Clone))]
#[must_use = "an acquisition only takes effect once its ticket is completed"]
pub struct AcquisitionTicket {
    generation: u64,
}

/// What happened to an acquisition result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionOutcome {
    /// The role was resolved and published
    Applied,
    /// A newer acquisition or role change started first; the result was dropped
    Superseded,
    /// The source failed and the failure policy was published
    Failed,
}

/// Holds the active [`PermissionSnapshot`]
///
/// Writers are `set_active_role`, `set_permission` and role acquisition.
/// They run one at a time under the generation lock; readers never take it.
/// Every write publishes a complete new snapshot, so readers see either the
/// old grants or the new ones, never a mix.
pub struct PermissionStore {
    resolver: PermissionResolver,
    registry: Arc<ModuleRegistry>,
    config: AccessConfig,
    snapshot: ArcSwap<PermissionSnapshot>,
    /// Generation of the latest acquisition or role change
    generation: Mutex<u64>,
    revision_tx: watch::Sender<u64>,
}

impl PermissionStore {
    /// Create a store in the pending state
    ///
    /// When `config.default_role` is set it is resolved immediately.
    pub fn new(
        resolver: PermissionResolver,
        registry: Arc<ModuleRegistry>,
        config: AccessConfig,
    ) -> Self {
        info!("Initializing permission store");

        let (revision_tx, _) = watch::channel(0);
        let store = Self {
            resolver,
            registry,
            config,
            snapshot: ArcSwap::from_pointee(PermissionSnapshot::pending()),
            generation: Mutex::new(0),
            revision_tx,
        };

        if let Some(role) = store.config.default_role.clone() {
            store.set_active_role(&role);
        }

        store
    }

    /// Build registry, table and store from a full configuration
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        let registry = Arc::new(ModuleRegistry::from_config(&config.modules)?);
        let table = super::roles::RolePermissionTable::from_config(&config.roles, &registry)?;
        let resolver = PermissionResolver::new(Arc::new(table));
        Ok(Self::new(resolver, registry, config.access.clone()))
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<PermissionSnapshot> {
        self.snapshot.load_full()
    }

    /// Receiver notified with the revision of every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &PermissionResolver {
        &self.resolver
    }

    /// Module definition by id
    pub fn get_module_config(&self, module: &str) -> Option<&ModuleDefinition> {
        self.registry.get(module)
    }

    /// Capability flags for `module` under the current snapshot
    pub fn capabilities(&self, module: &str) -> ModuleCapabilities {
        CapabilityProjector::project(self.snapshot().as_ref(), &self.registry, module)
    }

    /// Resolve `role_name` and publish it, superseding any in-flight acquisition
    pub fn set_active_role(&self, role_name: &str) {
        let mut generation = self.generation.lock();
        *generation += 1;
        self.apply_role(role_name);
    }

    /// Optimistically grant or revoke one permission on the resolved state
    ///
    /// Returns false, without publishing, when no role is resolved.
    pub fn set_permission(&self, module: &str, permission: &str, granted: bool) -> bool {
        let _generation = self.generation.lock();
        let current = self.snapshot();
        if !current.is_resolved() {
            warn!(
                "Ignoring update of {}:{} while permissions are not resolved",
                module, permission
            );
            return false;
        }

        let mut next = current.as_ref().clone();
        if granted {
            next.state.grant(module, permission);
        } else {
            next.state.revoke(module, permission);
        }

        debug!(
            "Set {}:{} to {} for role {:?}",
            module,
            permission,
            granted,
            next.role()
        );
        self.publish(next);
        true
    }

    /// Start an acquisition; only the most recent ticket can be completed
    ///
    /// The store goes back to pending so nothing stays granted while the new
    /// role is on its way.
    pub fn begin_acquisition(&self) -> AcquisitionTicket {
        let mut generation = self.generation.lock();
        *generation += 1;
        debug!("Starting role acquisition #{}", *generation);

        // A reason left by a failed attempt does not describe this one.
        let current = self.snapshot();
        if !current.is_pending() || current.unavailable_reason().is_some() {
            self.publish(PermissionSnapshot::pending());
        }

        AcquisitionTicket {
            generation: *generation,
        }
    }

    /// Apply the result of an acquisition unless it has been superseded
    ///
    /// Applying claims the ticket's generation, so the same acquisition can
    /// never publish twice.
    pub fn complete_acquisition(
        &self,
        ticket: AcquisitionTicket,
        result: Result<String>,
    ) -> AcquisitionOutcome {
        let mut generation = self.generation.lock();
        if *generation != ticket.generation {
            warn!(
                "Discarding role acquisition #{} superseded by #{}",
                ticket.generation, *generation
            );
            return AcquisitionOutcome::Superseded;
        }
        *generation += 1;

        match result {
            Ok(role) => {
                self.apply_role(&role);
                AcquisitionOutcome::Applied
            }
            Err(e) => {
                self.apply_failure(&e);
                AcquisitionOutcome::Failed
            }
        }
    }

    /// Acquire the role from `source`, bounded by the configured timeout
    pub async fn acquire_role(&self, source: &dyn RoleSource) -> AcquisitionOutcome {
        let ticket = self.begin_acquisition();
        let timeout = self.config.acquisition_timeout();

        let result = match tokio::time::timeout(timeout, source.acquire_role()).await {
            Ok(result) => result,
            Err(_) => Err(AccessError::timeout(format!(
                "Role acquisition did not finish within {}ms",
                timeout.as_millis()
            ))),
        };

        self.complete_acquisition(ticket, result)
    }

    fn apply_role(&self, role_name: &str) {
        let state = self.resolver.resolve(role_name);
        info!("Active role set to '{}'", role_name);
        self.publish(PermissionSnapshot::resolved(role_name, state));
    }

    fn apply_failure(&self, error: &AccessError) {
        warn!("Role acquisition failed: {}", error);
        let reason = format!("Content unavailable: {}", error);

        let snapshot = match self.config.failure_policy {
            AcquisitionFailurePolicy::Deny => PermissionSnapshot::failed(reason),
            AcquisitionFailurePolicy::RemainPending => PermissionSnapshot::unavailable(reason),
        };
        self.publish(snapshot);
    }

    fn publish(&self, mut snapshot: PermissionSnapshot) {
        let revision = *self.revision_tx.borrow() + 1;
        snapshot.revision = revision;
        self.snapshot.store(Arc::new(snapshot));
        self.revision_tx.send_replace(revision);
    }
}

impl std::fmt::Debug for PermissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionStore")
            .field("snapshot", &self.snapshot())
            .field("generation", &*self.generation.lock())
            .finish()
    }
}
