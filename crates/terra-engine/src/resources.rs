//! Per-resource permission facades.
//!
//! Named predicates for the authorization questions route handlers ask
//! most. Each one hard-codes its resource and action and forwards to the
//! checker; there is no logic here beyond call-site readability, and the
//! facades must stay consistent with the checker (the test suite exercises
//! them through the same properties).

use terra_contracts::permission::{Action, Permission, PermissionSet, Resource, Scope};

use crate::checker::{can_access_resource, has_permission};

/// Authorization questions about clients.
pub struct ClientPermissions;

impl ClientPermissions {
    pub fn can_view(permissions: &PermissionSet, scope: Scope) -> bool {
        can_access_resource(permissions, Resource::Clients, Action::View, Some(scope))
    }

    pub fn can_create(permissions: &PermissionSet) -> bool {
        can_access_resource(permissions, Resource::Clients, Action::Create, None)
    }

    pub fn can_update(permissions: &PermissionSet, scope: Scope) -> bool {
        can_access_resource(permissions, Resource::Clients, Action::Update, Some(scope))
    }

    pub fn can_delete(permissions: &PermissionSet, scope: Scope) -> bool {
        can_access_resource(permissions, Resource::Clients, Action::Delete, Some(scope))
    }

    pub fn can_export(permissions: &PermissionSet) -> bool {
        can_access_resource(permissions, Resource::Clients, Action::Export, None)
    }
}

/// Authorization questions about deals.
pub struct DealPermissions;

impl DealPermissions {
    pub fn can_view(permissions: &PermissionSet, scope: Scope) -> bool {
        can_access_resource(permissions, Resource::Deals, Action::View, Some(scope))
    }

    pub fn can_create(permissions: &PermissionSet) -> bool {
        can_access_resource(permissions, Resource::Deals, Action::Create, None)
    }

    pub fn can_update(permissions: &PermissionSet, scope: Scope) -> bool {
        can_access_resource(permissions, Resource::Deals, Action::Update, Some(scope))
    }

    /// Approval is a single gate, not scoped by own/team/tenant.
    pub fn can_approve(permissions: &PermissionSet) -> bool {
        has_permission(permissions, &Permission::unscoped(Resource::Deals, Action::Approve))
    }
}

/// Authorization questions for the admin console.
pub struct AdminPermissions;

impl AdminPermissions {
    pub fn can_manage_members(permissions: &PermissionSet) -> bool {
        has_permission(permissions, &Permission::unscoped(Resource::Members, Action::Manage))
    }

    pub fn can_invite_members(permissions: &PermissionSet) -> bool {
        has_permission(permissions, &Permission::unscoped(Resource::Members, Action::Invite))
    }

    pub fn can_manage_settings(permissions: &PermissionSet) -> bool {
        has_permission(permissions, &Permission::unscoped(Resource::Settings, Action::Manage))
    }

    pub fn can_manage_billing(permissions: &PermissionSet) -> bool {
        has_permission(permissions, &Permission::unscoped(Resource::Billing, Action::Manage))
    }

    pub fn can_view_audit_logs(permissions: &PermissionSet) -> bool {
        has_permission(permissions, &Permission::unscoped(Resource::AuditLogs, Action::View))
    }
}
