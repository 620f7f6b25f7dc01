//! Scenario 3: Admin Console
//!
//! Owner and admin differ in exactly one place: billing. The scenario
//! shows that split, then loads Harborview's custom roles from TOML into
//! the role store, lists the merged registry (system roles first), and
//! resolves a caller who holds viewer + closer to show custom roles
//! layering on top of a system role.

use terra_catalog::{list_roles, resolve_permission_set, roles_from_toml_str, InMemoryRoleStore};
use terra_contracts::error::TerraResult;
use terra_contracts::role::{Role, SystemRoleKind};
use terra_engine::resources::{AdminPermissions, DealPermissions};

use crate::mock_data::{tenant_id, HARBORVIEW_CUSTOM_ROLES};

/// Run Scenario 3: Admin Console — owner vs. admin, plus custom roles.
pub fn run_scenario() -> TerraResult<()> {
    println!("=== Scenario 3: Admin Console ===");
    println!();

    // ── Owner vs. admin ───────────────────────────────────────────────────────

    let owner = resolve_permission_set(&[Role::System(SystemRoleKind::Owner)]);
    let admin = resolve_permission_set(&[Role::System(SystemRoleKind::Admin)]);

    println!("  Question                 owner   admin");
    println!(
        "  Manage members:          {:<7} {}",
        AdminPermissions::can_manage_members(&owner),
        AdminPermissions::can_manage_members(&admin)
    );
    println!(
        "  Invite members:          {:<7} {}",
        AdminPermissions::can_invite_members(&owner),
        AdminPermissions::can_invite_members(&admin)
    );
    println!(
        "  Manage settings:         {:<7} {}",
        AdminPermissions::can_manage_settings(&owner),
        AdminPermissions::can_manage_settings(&admin)
    );
    println!(
        "  View audit logs:         {:<7} {}",
        AdminPermissions::can_view_audit_logs(&owner),
        AdminPermissions::can_view_audit_logs(&admin)
    );
    println!(
        "  Manage billing:          {:<7} {}",
        AdminPermissions::can_manage_billing(&owner),
        AdminPermissions::can_manage_billing(&admin)
    );
    println!("  RESULT: billing is the owner's alone (expected)");
    println!();

    // ── Custom roles from TOML ────────────────────────────────────────────────

    let tenant = tenant_id();
    let store = InMemoryRoleStore::new();
    for role in roles_from_toml_str(&tenant, HARBORVIEW_CUSTOM_ROLES)? {
        store.insert(role)?;
    }

    let merged = list_roles(&store, &tenant, true)?;
    println!("  Registry for {} ({} roles):", tenant, merged.len());
    for role in &merged {
        let kind = if role.is_system() { "system" } else { "custom" };
        println!("    - {:<20} [{}]", role.name(), kind);
    }
    println!();

    // ── A caller holding viewer + closer ──────────────────────────────────────

    let closer = merged
        .iter()
        .find(|r| r.name() == "closer")
        .cloned()
        .ok_or_else(|| terra_contracts::error::TerraError::UnknownRole {
            name: "closer".to_string(),
        })?;

    let caller = resolve_permission_set(&[Role::System(SystemRoleKind::Viewer), closer]);
    println!("  Caller roles: viewer + closer (custom)");
    println!("  Can approve deals:       {}", DealPermissions::can_approve(&caller));
    println!("  Can manage members:      {}", AdminPermissions::can_manage_members(&caller));
    println!("  RESULT: the custom role adds the approval gate and nothing");
    println!("  administrative (expected)");
    println!();

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
