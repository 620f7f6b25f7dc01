//! System role definitions.
//!
//! The five built-in roles are derived from the catalog rather than written
//! out by hand, so the catalog stays the single source of truth:
//!
//! - `owner`   — every catalog permission, in catalog order.
//! - `admin`   — owner minus `BILLING_MANAGE`; only the owner manages billing.
//! - `manager` — own- and team-scoped record access, the create and
//!   team-assign actions, deal approval, member list/invite, settings view.
//! - `agent`   — own-scoped record access plus the create actions. Agents
//!   can create but never destroy tenant-wide data.
//! - `viewer`  — exactly the `*_VIEW_OWN` entries; strictly read-only.

use std::sync::OnceLock;

use terra_contracts::permission::{Action, Permission, Resource, Scope};
use terra_contracts::role::SystemRoleKind;

use crate::catalog::catalog;

/// A built-in role and its resolved permission list.
#[derive(Debug, Clone)]
pub struct SystemRole {
    pub kind: SystemRoleKind,
    /// In catalog order.
    pub permissions: Vec<Permission>,
}

/// The five system roles, in the fixed listing order
/// (owner, admin, manager, agent, viewer). Built once, never mutated.
pub fn system_roles() -> &'static [SystemRole] {
    static ROLES: OnceLock<Vec<SystemRole>> = OnceLock::new();
    ROLES.get_or_init(|| {
        SystemRoleKind::ALL
            .iter()
            .map(|&kind| SystemRole { kind, permissions: permissions_for(kind) })
            .collect()
    })
}

/// Look up a single system role by kind.
pub fn system_role(kind: SystemRoleKind) -> &'static SystemRole {
    // ALL and system_roles() share one ordering, so the position matches.
    let position = SystemRoleKind::ALL.iter().position(|&k| k == kind).unwrap_or(0);
    &system_roles()[position]
}

fn permissions_for(kind: SystemRoleKind) -> Vec<Permission> {
    let all = || catalog().permissions().copied();
    match kind {
        SystemRoleKind::Owner => all().collect(),

        SystemRoleKind::Admin => {
            let billing_manage = Permission::unscoped(Resource::Billing, Action::Manage);
            all().filter(|p| *p != billing_manage).collect()
        }

        SystemRoleKind::Manager => all().filter(is_manager_permission).collect(),

        SystemRoleKind::Agent => all().filter(is_agent_permission).collect(),

        SystemRoleKind::Viewer => {
            all()
                .filter(|p| p.action == Action::View && p.scope == Some(Scope::Own))
                .collect()
        }
    }
}

fn is_manager_permission(p: &Permission) -> bool {
    let p = *p;
    // Own- and team-scoped record work, including team reassignment.
    let team_record_work = matches!(p.scope, Some(Scope::Own) | Some(Scope::Team))
        && matches!(p.action, Action::View | Action::Update | Action::Delete | Action::Assign);
    // Creating records is never scoped.
    let creates = p.action == Action::Create;
    // Named extras a team lead needs; no MANAGE actions, no *_ALL
    // destructive scopes.
    let extras = [
        Permission::scoped(Resource::Members, Action::View, Scope::All),
        Permission::unscoped(Resource::Members, Action::Invite),
        Permission::unscoped(Resource::Deals, Action::Approve),
        Permission::unscoped(Resource::Settings, Action::View),
        Permission::unscoped(Resource::Clients, Action::Export),
        Permission::unscoped(Resource::Reports, Action::Export),
    ];
    team_record_work || creates || extras.contains(&p)
}

fn is_agent_permission(p: &Permission) -> bool {
    let p = *p;
    let own_record_work = p.scope == Some(Scope::Own)
        && matches!(p.action, Action::View | Action::Update | Action::Delete);
    let creates = p.action == Action::Create;
    own_record_work || creates
}
