//! Role acquisition sources

use async_trait::async_trait;

use crate::utils::error::Result;

/// Supplies the active role name, typically from a session or backend call
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleSource: Send + Sync {
    async fn acquire_role(&self) -> Result<String>;
}

/// Source that always answers with the same role
#[derive(Debug, Clone)]
pub struct StaticRoleSource {
    role: String,
}

impl StaticRoleSource {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

#[async_trait]
impl RoleSource for StaticRoleSource {
    async fn acquire_role(&self) -> Result<String> {
        Ok(self.role.clone())
    }
}
