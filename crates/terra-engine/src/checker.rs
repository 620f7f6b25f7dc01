//! Pure membership and scope-resolution checks.
//!
//! Every function here is a total function of its arguments: no state, no
//! I/O, no errors. A denial is simply `false`. The permission set belongs
//! to the calling request; the engine only reads it.

use serde::{Deserialize, Serialize};

use terra_contracts::permission::{Action, Permission, PermissionSet, Resource, Scope};

/// How widely a caller can reach into a resource, derived from the scopes
/// of the permissions they hold.
///
/// Ordered: `Own < Team < Tenant`. Broader scope implies stronger access,
/// so resolution takes the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Own,
    Team,
    Tenant,
}

impl From<Scope> for AccessLevel {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Own => AccessLevel::Own,
            Scope::Team => AccessLevel::Team,
            Scope::All => AccessLevel::Tenant,
        }
    }
}

/// Exact membership test. An empty set denies everything.
pub fn has_permission(permissions: &PermissionSet, permission: &Permission) -> bool {
    permissions.has(permission)
}

/// True iff the caller holds at least one of `required`.
///
/// An empty `required` list grants nothing: there is nothing to hold.
pub fn has_any_permission(permissions: &PermissionSet, required: &[Permission]) -> bool {
    required.iter().any(|p| permissions.has(p))
}

/// True iff the caller holds every entry of `required`.
///
/// Vacuously true when `required` is empty, even for an empty permission
/// set. Callers gating an operation must pass the actual requirements;
/// an empty list is "no requirements", not "deny".
pub fn has_all_permissions(permissions: &PermissionSet, required: &[Permission]) -> bool {
    required.iter().all(|p| permissions.has(p))
}

/// Build the candidate permission for `(resource, action, scope)` and test
/// membership. With `scope = None` the scope-less form is tested
/// (e.g. `CLIENTS_CREATE`, not `CLIENTS_CREATE_OWN`).
pub fn can_access_resource(
    permissions: &PermissionSet,
    resource: Resource,
    action: Action,
    scope: Option<Scope>,
) -> bool {
    permissions.has(&Permission { resource, action, scope })
}

/// The widest access level the caller holds for `resource`, or `None` if
/// they hold no scoped permission for it.
///
/// Precedence is strictly tenant > team > own: any `*_ALL` grant resolves
/// to [`AccessLevel::Tenant`] even when narrower grants are also present.
/// Scope-less permissions do not participate.
pub fn permission_level(permissions: &PermissionSet, resource: Resource) -> Option<AccessLevel> {
    permissions
        .iter()
        .filter(|p| p.resource == resource)
        .filter_map(|p| p.scope.map(AccessLevel::from))
        .max()
}
