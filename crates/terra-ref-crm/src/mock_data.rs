//! Simulated brokerage data for the TERRA reference runtime.
//!
//! All data in this module is hardcoded and fictional. This module acts as
//! a stand-in for the CRM's persistence layer in a production deployment;
//! the engine itself never touches storage.

use serde_json::{json, Value};

use terra_contracts::context::{DeviceType, RequestContext, UserId};
use terra_contracts::role::TenantId;

/// The demo tenant: Harborview Realty, a mid-size coastal brokerage.
pub fn tenant_id() -> TenantId {
    TenantId::new("tenant-harborview")
}

/// Custom roles the Harborview admins have defined, as the TOML document
/// the admin console would submit.
///
/// - `listing-coordinator` preps listings for the whole team but never
///   touches deals or members.
/// - `closer` sees the team's deals and holds the approval gate, nothing
///   else.
pub const HARBORVIEW_CUSTOM_ROLES: &str = r##"
[[roles]]
name = "listing-coordinator"
description = "Preps and maintains listings for the whole team"
permissions = [
    "CLIENTS_VIEW_TEAM",
    "CLIENTS_UPDATE_TEAM",
    "TASKS_VIEW_TEAM",
    "TASKS_CREATE",
    "TASKS_UPDATE_TEAM",
]
color = "#2f6f4e"

[[roles]]
name = "closer"
description = "Reviews and approves team deals for closing"
permissions = [
    "DEALS_VIEW_TEAM",
    "DEALS_APPROVE",
]
color = "#8a4b2f"
"##;

/// Build a request context for a Harborview user.
pub fn request_context(
    user_id: &str,
    teams: &[&str],
    location: Option<&str>,
    device: Option<DeviceType>,
) -> RequestContext {
    let mut ctx = RequestContext::new(UserId::new(user_id), tenant_id())
        .with_teams(teams.iter().copied());
    if let Some(location) = location {
        ctx = ctx.with_location(location);
    }
    if let Some(device) = device {
        ctx = ctx.with_device(device);
    }
    ctx
}

// ── Clients (mock) ────────────────────────────────────────────────────────────

/// Return a mock client record for the given client ID.
///
/// Clients whose ID ends in `-team` are owned by another member of the
/// caller's team rather than by the caller.
pub fn get_client_record(client_id: &str) -> Value {
    let owned_by_teammate = client_id.ends_with("-team");
    json!({
        "client_id": client_id,
        "name": "Jordan Meyer",
        "stage": "actively_searching",
        "budget_usd": 685_000,
        "preferred_areas": ["Harborview North", "Saltgrass Point"],
        "owner_user_id": if owned_by_teammate { "user-12" } else { "user-7" },
        "last_contacted": "2026-08-18"
    })
}

// ── Deals (mock) ──────────────────────────────────────────────────────────────

/// Return a mock deal for the given deal ID.
///
/// Deals whose ID ends in `-pending` still await approval.
pub fn get_deal(deal_id: &str) -> Value {
    let pending = deal_id.ends_with("-pending");
    json!({
        "deal_id": deal_id,
        "listing_address": "18 Saltgrass Point Rd",
        "client_id": "client-204",
        "stage": if pending { "pending_approval" } else { "under_contract" },
        "offer_usd": 672_500,
        "commission_pct": 2.5,
        "opened": "2026-07-30"
    })
}
