//! The role registry: listing, validation, and permission resolution.
//!
//! Custom roles live in external storage behind the [`RoleProvider`] trait;
//! this module defines the merge contract (system roles prepended before
//! tenant custom roles), the create-time validation rules, and the
//! flattening of a caller's roles into the [`PermissionSet`] the engine
//! consumes. [`InMemoryRoleStore`] is the reference provider used by tests
//! and the demo scenarios.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use tracing::debug;

use terra_contracts::error::{TerraError, TerraResult};
use terra_contracts::permission::{Permission, PermissionSet};
use terra_contracts::role::{CustomRole, Role, RoleId, SystemRoleKind, TenantId};

use crate::catalog::catalog;
use crate::roles::{system_role, system_roles};

/// The persistence collaborator seam for tenant-defined roles.
///
/// Implementations load a tenant's custom roles, soft-deleted ones
/// included; callers filter on `deleted_at` as appropriate. Storage
/// failures surface as [`TerraError::StorageError`].
pub trait RoleProvider: Send + Sync {
    fn custom_roles(&self, tenant_id: &TenantId) -> TerraResult<Vec<CustomRole>>;
}

/// List the roles visible to a tenant.
///
/// When `include_system` is true, the five system roles come first, in
/// their fixed order, followed by the tenant's live custom roles in the
/// order the provider returns them. Soft-deleted roles are excluded. No
/// deduplication by permission content is performed.
pub fn list_roles(
    provider: &dyn RoleProvider,
    tenant_id: &TenantId,
    include_system: bool,
) -> TerraResult<Vec<Role>> {
    let mut roles = Vec::new();
    if include_system {
        roles.extend(system_roles().iter().map(|r| Role::System(r.kind)));
    }
    roles.extend(
        provider
            .custom_roles(tenant_id)?
            .into_iter()
            .filter(|r| !r.is_deleted())
            .map(Role::Custom),
    );

    debug!(tenant_id = %tenant_id, count = roles.len(), include_system, "listed roles");
    Ok(roles)
}

/// The permissions a role grants.
///
/// System role permissions are process-wide constants; custom role
/// permissions are borrowed from the role itself.
pub fn role_permissions(role: &Role) -> &[Permission] {
    match role {
        Role::System(kind) => &system_role(*kind).permissions,
        Role::Custom(custom) => &custom.permissions,
    }
}

/// Flatten a caller's roles into the set handed to the engine.
///
/// This is the shape the session collaborator attaches to each request:
/// the union of every held role's permissions, order-free.
pub fn resolve_permission_set(roles: &[Role]) -> PermissionSet {
    roles
        .iter()
        .flat_map(|role| role_permissions(role).iter().copied())
        .collect()
}

/// Validate a custom role before it is created.
///
/// Rules, checked in order:
/// - the name must be non-empty after trimming;
/// - the name must not shadow a system role (case-insensitive);
/// - the name must not collide with a live custom role in the same tenant
///   (case-insensitive; the role's own id is exempt so updates pass);
/// - every permission must exist in the catalog;
/// - the permission list must contain no duplicates.
pub fn validate_custom_role(role: &CustomRole, existing: &[CustomRole]) -> TerraResult<()> {
    let name = role.name.trim();
    if name.is_empty() {
        return Err(TerraError::InvalidRole { reason: "role name must not be empty".to_string() });
    }

    let lowered = name.to_lowercase();
    if SystemRoleKind::ALL.iter().any(|k| k.name() == lowered) {
        return Err(TerraError::ReservedRoleName { name: name.to_string() });
    }

    let collides = existing.iter().any(|other| {
        other.id != role.id
            && other.tenant_id == role.tenant_id
            && !other.is_deleted()
            && other.name.trim().to_lowercase() == lowered
    });
    if collides {
        return Err(TerraError::RoleNameCollision { name: name.to_string() });
    }

    let mut seen = HashSet::new();
    for permission in &role.permissions {
        if !catalog().contains(permission) {
            return Err(TerraError::InvalidRole {
                reason: format!("permission '{permission}' is not in the catalog"),
            });
        }
        if !seen.insert(*permission) {
            return Err(TerraError::InvalidRole {
                reason: format!("permission '{permission}' is listed twice"),
            });
        }
    }

    Ok(())
}

// ── In-memory reference provider ──────────────────────────────────────────────

/// An in-memory `RoleProvider` for tests and demo scenarios.
///
/// Keeps roles in a `Mutex`-guarded map keyed by tenant, so it can be
/// shared across threads like a real storage handle. Inserts run the full
/// create-time validation; deletion is soft.
#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    roles: Mutex<HashMap<TenantId, Vec<CustomRole>>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> TerraResult<std::sync::MutexGuard<'_, HashMap<TenantId, Vec<CustomRole>>>> {
        self.roles.lock().map_err(|e| TerraError::StorageError {
            reason: format!("role store lock poisoned: {}", e),
        })
    }

    /// Validate and store a custom role.
    pub fn insert(&self, role: CustomRole) -> TerraResult<()> {
        let mut roles = self.lock()?;
        let tenant_roles = roles.entry(role.tenant_id.clone()).or_default();
        validate_custom_role(&role, tenant_roles)?;
        debug!(tenant_id = %role.tenant_id, role = %role.name, "custom role stored");
        tenant_roles.push(role);
        Ok(())
    }

    /// Soft-delete a role by id. The row is kept; listings skip it.
    pub fn soft_delete(&self, tenant_id: &TenantId, role_id: &RoleId) -> TerraResult<()> {
        let mut roles = self.lock()?;
        let role = roles
            .get_mut(tenant_id)
            .and_then(|list| list.iter_mut().find(|r| &r.id == role_id && !r.is_deleted()))
            .ok_or_else(|| TerraError::UnknownRole { name: role_id.0.to_string() })?;
        role.deleted_at = Some(chrono::Utc::now());
        Ok(())
    }
}

impl RoleProvider for InMemoryRoleStore {
    fn custom_roles(&self, tenant_id: &TenantId) -> TerraResult<Vec<CustomRole>> {
        let roles = self.lock()?;
        Ok(roles.get(tenant_id).cloned().unwrap_or_default())
    }
}
