//! Scenario 1: Client Access
//!
//! Walks the agent, manager, and viewer system roles through the same
//! client questions and shows how scope resolution answers them:
//!
//! - agents work their own book of clients (level: own);
//! - managers reach their whole team's book (level: team);
//! - viewers read their own records and change nothing.

use terra_catalog::resolve_permission_set;
use terra_contracts::error::TerraResult;
use terra_contracts::permission::{Resource, Scope};
use terra_contracts::role::{Role, SystemRoleKind};
use terra_engine::checker::permission_level;
use terra_engine::resources::ClientPermissions;

use crate::mock_data::get_client_record;

/// Run Scenario 1: Client Access across three system roles.
pub fn run_scenario() -> TerraResult<()> {
    println!("=== Scenario 1: Client Access ===");
    println!();

    let own_client = get_client_record("client-118");
    let team_client = get_client_record("client-204-team");
    println!(
        "  Records in play: {} (own book), {} (teammate's)",
        own_client["client_id"], team_client["client_id"]
    );
    println!();

    for kind in [SystemRoleKind::Agent, SystemRoleKind::Manager, SystemRoleKind::Viewer] {
        let permissions = resolve_permission_set(&[Role::System(kind)]);
        let level = permission_level(&permissions, Resource::Clients);

        println!("  Role: {}", kind.name());
        println!(
            "  Client access level:    {}",
            level.map(|l| format!("{l:?}")).unwrap_or_else(|| "none".to_string())
        );
        println!(
            "  View own / team / all:  {} / {} / {}",
            ClientPermissions::can_view(&permissions, Scope::Own),
            ClientPermissions::can_view(&permissions, Scope::Team),
            ClientPermissions::can_view(&permissions, Scope::All),
        );
        println!(
            "  Create new client:      {}",
            ClientPermissions::can_create(&permissions)
        );
        println!(
            "  Update teammate's:      {}",
            ClientPermissions::can_update(&permissions, Scope::Team)
        );
        println!(
            "  Delete tenant-wide:     {}",
            ClientPermissions::can_delete(&permissions, Scope::All)
        );
        println!();
    }

    println!("  Note: no role below admin can delete tenant-wide, and the");
    println!("  viewer answered false to every write. Scope precedence picked");
    println!("  the widest grant each role holds.");
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
