//! Role identity and role data types.
//!
//! Roles come in exactly two kinds, and the split is a type-level invariant:
//! system roles are process-wide constants that no tenant can edit, while
//! custom roles always belong to a tenant. There is no `is_system` flag and
//! no nullable tenant id to keep consistent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::permission::Permission;

/// Unique identifier for a custom role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub uuid::Uuid);

impl RoleId {
    /// Create a new, unique role ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RoleId {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable identifier for a tenant (a brokerage account).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(pub String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The five built-in system roles, in display order.
///
/// System roles are shared across all tenants and immutable for the process
/// lifetime. Their permission sets are defined by the role registry in
/// `terra-catalog`; this enum only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemRoleKind {
    Owner,
    Admin,
    Manager,
    Agent,
    Viewer,
}

impl SystemRoleKind {
    /// Every system role, in the fixed listing order.
    pub const ALL: [SystemRoleKind; 5] = [
        SystemRoleKind::Owner,
        SystemRoleKind::Admin,
        SystemRoleKind::Manager,
        SystemRoleKind::Agent,
        SystemRoleKind::Viewer,
    ];

    /// The stable lowercase role name, as stored in sessions and audit logs.
    pub const fn name(&self) -> &'static str {
        match self {
            SystemRoleKind::Owner => "owner",
            SystemRoleKind::Admin => "admin",
            SystemRoleKind::Manager => "manager",
            SystemRoleKind::Agent => "agent",
            SystemRoleKind::Viewer => "viewer",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            SystemRoleKind::Owner => "Full access to everything in the tenant, including billing",
            SystemRoleKind::Admin => "Administers members and settings; cannot manage billing",
            SystemRoleKind::Manager => "Runs a team: team-wide client, deal, and task access plus deal approval",
            SystemRoleKind::Agent => "Works own clients, deals, and tasks; can create new records",
            SystemRoleKind::Viewer => "Read-only access to records the user owns",
        }
    }
}

/// A tenant-defined role.
///
/// Created and edited by tenant administrators through external flows; the
/// engine only ever reads `permissions`. Deletion is soft: a deleted role
/// keeps its row but carries `deleted_at` and is excluded from listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRole {
    pub id: RoleId,
    pub tenant_id: TenantId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CustomRole {
    /// Build a new live custom role with a fresh id.
    pub fn new(
        tenant_id: TenantId,
        name: impl Into<String>,
        description: impl Into<String>,
        permissions: Vec<Permission>,
    ) -> Self {
        Self {
            id: RoleId::new(),
            tenant_id,
            name: name.into(),
            description: description.into(),
            permissions,
            color: None,
            icon: None,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Any role a caller may hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// One of the five built-in roles.
    System(SystemRoleKind),
    /// A tenant-defined role.
    Custom(CustomRole),
}

impl Role {
    pub fn name(&self) -> &str {
        match self {
            Role::System(kind) => kind.name(),
            Role::Custom(role) => &role.name,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Role::System(_))
    }

    /// The owning tenant; `None` for system roles, which are shared.
    pub fn tenant_id(&self) -> Option<&TenantId> {
        match self {
            Role::System(_) => None,
            Role::Custom(role) => Some(&role.tenant_id),
        }
    }
}
