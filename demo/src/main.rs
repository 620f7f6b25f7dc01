//! TERRA Brokerage CRM — Demo CLI
//!
//! Runs one or all of the three authorization demo scenarios. Each scenario
//! uses real TERRA components (catalog, role registry, checker, contextual
//! evaluator) wired together with mock brokerage data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- client-access
//!   cargo run -p demo -- deal-approval
//!   cargo run -p demo -- admin-console

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use terra_ref_crm::scenarios::{admin_console, client_access, deal_approval};

// ── CLI definition ────────────────────────────────────────────────────────────

/// TERRA — permission engine demo for a multi-tenant brokerage CRM.
///
/// Each subcommand runs one or all of the three scenarios, demonstrating
/// scope resolution, the deal-approval gate, and custom-role layering.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "TERRA brokerage CRM authorization demo",
    long_about = "Runs TERRA demo scenarios showing role permission resolution,\n\
                  scope precedence, contextual conditions, and custom roles."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: Client Access (scope resolution across system roles).
    ClientAccess,
    /// Scenario 2: Deal Approval (single gate plus contextual conditions).
    DealApproval,
    /// Scenario 3: Admin Console (owner vs admin, custom roles from TOML).
    AdminConsole,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::ClientAccess => client_access::run_scenario(),
        Command::DealApproval => deal_approval::run_scenario(),
        Command::AdminConsole => admin_console::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> terra_contracts::error::TerraResult<()> {
    client_access::run_scenario()?;
    deal_approval::run_scenario()?;
    admin_console::run_scenario()?;
    Ok(())
}

fn print_banner() {
    println!("==============================================");
    println!("  TERRA — role-based access for brokerage CRMs");
    println!("  tenant: Harborview Realty (demo data)");
    println!("==============================================");
    println!();
}
