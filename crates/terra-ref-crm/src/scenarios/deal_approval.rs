//! Scenario 2: Deal Approval
//!
//! The approval gate is a single scope-less permission (`DEALS_APPROVE`):
//! holding every other deal permission does not confer it, and holding it
//! confers nothing else. On top of the gate, Harborview's compliance desk
//! requires approvals to come from the US and never from a phone, which is
//! a contextual restriction supplied at the call site rather than a role.

use serde_json::json;

use terra_catalog::resolve_permission_set;
use terra_contracts::context::{ConditionOperator, DeviceType, PermissionCondition};
use terra_contracts::error::TerraResult;
use terra_contracts::permission::{Action, Permission, Resource};
use terra_contracts::role::{Role, SystemRoleKind};
use terra_engine::policy::has_contextual_permission;
use terra_engine::resources::DealPermissions;

use crate::mock_data::{get_deal, request_context};

/// The call-site policy: approvals only from the US, never from mobile.
fn approval_conditions() -> Vec<PermissionCondition> {
    vec![
        PermissionCondition::new("location", ConditionOperator::Eq, json!("US")),
        PermissionCondition::new("device_type", ConditionOperator::Ne, json!("mobile")),
    ]
}

/// Run Scenario 2: Deal Approval — role gate plus contextual conditions.
pub fn run_scenario() -> TerraResult<()> {
    println!("=== Scenario 2: Deal Approval ===");
    println!();

    let deal = get_deal("deal-961-pending");
    println!(
        "  Deal {} at {} — offer ${}, stage: {}",
        deal["deal_id"], deal["listing_address"], deal["offer_usd"], deal["stage"]
    );
    println!();

    let manager = resolve_permission_set(&[Role::System(SystemRoleKind::Manager)]);
    let agent = resolve_permission_set(&[Role::System(SystemRoleKind::Agent)]);
    let approve = Permission::unscoped(Resource::Deals, Action::Approve);
    let conditions = approval_conditions();

    // ── Sub-case A: agent holds no approval gate ──────────────────────────────

    println!("  Sub-case A: agent tries to approve");
    println!("  Holds DEALS_VIEW_OWN, DEALS_UPDATE_OWN, DEALS_CREATE: yes");
    println!("  Can approve:            {}", DealPermissions::can_approve(&agent));
    println!("  RESULT: denied by role (expected)");
    println!();

    // ── Sub-case B: manager, from the office ──────────────────────────────────

    let office = request_context("user-31", &["team-east"], Some("US"), Some(DeviceType::Desktop));
    let granted = has_contextual_permission(&manager, &approve, &office, &conditions);

    println!("  Sub-case B: manager approves from an office desktop (US)");
    println!("  Role gate DEALS_APPROVE: {}", DealPermissions::can_approve(&manager));
    println!("  Conditions (location=US, device!=mobile): pass");
    println!("  Decision:               {}", if granted { "ALLOW" } else { "DENY" });
    println!("  RESULT: allowed (expected)");
    println!();

    // ── Sub-case C: same manager, same gate, wrong context ────────────────────

    let phone_abroad =
        request_context("user-31", &["team-east"], Some("PT"), Some(DeviceType::Mobile));
    let granted = has_contextual_permission(&manager, &approve, &phone_abroad, &conditions);

    println!("  Sub-case C: same manager, from a phone abroad (PT)");
    println!("  Role gate DEALS_APPROVE: {}", DealPermissions::can_approve(&manager));
    println!("  Conditions: location fails, device fails (both evaluated)");
    println!("  Decision:               {}", if granted { "ALLOW" } else { "DENY" });
    println!("  RESULT: denied by context, not by role (expected)");
    println!();

    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
