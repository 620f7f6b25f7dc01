//! The three reference scenarios.
//!
//! Each scenario exposes a single `run_scenario()` entry point that wires
//! real TERRA components together over the mock data and prints what the
//! engine decided at every step.

pub mod admin_console;
pub mod client_access;
pub mod deal_approval;
