//! Permission gate: decides whether protected content may be shown

use std::sync::{Arc, Weak};
use tokio::sync::watch;

use super::permissions::PermissionQuery;
use super::store::PermissionStore;
use super::types::PermissionSnapshot;

/// Gate verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Permissions are not resolved yet
    Pending,
    Granted,
    Denied,
}

impl GateState {
    pub fn is_granted(&self) -> bool {
        matches!(self, GateState::Granted)
    }
}

/// How a list of permissions is combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequireMode {
    /// At least one listed permission
    #[default]
    Any,
    /// Every listed permission
    All,
}

/// What a gate shows when it does not show the protected content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fallback<C> {
    #[default]
    Nothing,
    Content(C),
}

impl<C> Fallback<C> {
    fn into_option(self) -> Option<C> {
        match self {
            Fallback::Nothing => None,
            Fallback::Content(content) => Some(content),
        }
    }
}

/// Conditional rendering boundary keyed on a permission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGate {
    permission: String,
    module: Option<String>,
    permissions: Vec<String>,
    mode: RequireMode,
}

impl PermissionGate {
    pub fn new(permission: impl Into<String>) -> Self {
        Self {
            permission: permission.into(),
            module: None,
            permissions: Vec::new(),
            mode: RequireMode::default(),
        }
    }

    /// Scope the check to one module
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Require at least one of `permissions` instead of the primary permission
    pub fn any_of<I, S>(self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_list(permissions, RequireMode::Any)
    }

    /// Require all of `permissions` instead of the primary permission
    pub fn all_of<I, S>(self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_list(permissions, RequireMode::All)
    }

    fn with_list<I, S>(mut self, permissions: I, mode: RequireMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self.mode = mode;
        self
    }

    pub fn permission(&self) -> &str {
        &self.permission
    }

    /// Evaluate the gate against a snapshot
    ///
    /// A non-empty permission list takes precedence over the primary
    /// permission. A failed acquisition evaluates to `Denied`.
    pub fn evaluate(&self, snapshot: &PermissionSnapshot) -> GateState {
        if snapshot.is_pending() {
            return GateState::Pending;
        }

        let module = self.module.as_deref();
        let granted = if self.permissions.is_empty() {
            snapshot.has_permission(&self.permission, module)
        } else {
            match self.mode {
                RequireMode::All => snapshot.has_all_permissions(&self.permissions, module),
                RequireMode::Any => snapshot.has_any_permission(&self.permissions, module),
            }
        };

        if granted {
            GateState::Granted
        } else {
            GateState::Denied
        }
    }

    /// `content` when granted, otherwise the fallback
    pub fn render<C>(
        &self,
        snapshot: &PermissionSnapshot,
        content: C,
        fallback: Fallback<C>,
    ) -> Option<C> {
        match self.evaluate(snapshot) {
            GateState::Granted => Some(content),
            GateState::Denied | GateState::Pending => fallback.into_option(),
        }
    }

    /// Bind the gate to a store so it re-evaluates on every change
    pub fn watch(self, store: &Arc<PermissionStore>) -> GateWatcher {
        GateWatcher {
            receiver: store.subscribe(),
            store: Arc::downgrade(store),
            gate: self,
        }
    }
}

/// A gate subscribed to a [`PermissionStore`]
///
/// Holds no verdict of its own; every call evaluates the latest snapshot.
/// The watcher does not keep the store alive; once it is gone the gate
/// evaluates as pending.
pub struct GateWatcher {
    gate: PermissionGate,
    store: Weak<PermissionStore>,
    receiver: watch::Receiver<u64>,
}

impl GateWatcher {
    pub fn gate(&self) -> &PermissionGate {
        &self.gate
    }

    /// Verdict for the current snapshot
    pub fn current(&self) -> GateState {
        self.gate.evaluate(&self.snapshot())
    }

    /// Wait for the next published snapshot and evaluate it
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<GateState> {
        self.receiver.changed().await.ok()?;
        Some(self.current())
    }

    /// Content or fallback for the current snapshot
    pub fn render<C>(&self, content: C, fallback: Fallback<C>) -> Option<C> {
        self.gate.render(&self.snapshot(), content, fallback)
    }

    fn snapshot(&self) -> Arc<PermissionSnapshot> {
        match self.store.upgrade() {
            Some(store) => store.snapshot(),
            None => Arc::new(PermissionSnapshot::pending()),
        }
    }
}
