//! # terra-ref-crm
//!
//! Reference CRM runtime for the TERRA permission engine.
//!
//! Demonstrates three authorization scenarios using mock brokerage data:
//!
//! 1. **Client Access** — scope resolution (own/team/tenant) across the
//!    agent, manager, and viewer system roles.
//! 2. **Deal Approval** — the scope-less `DEALS_APPROVE` gate plus
//!    contextual conditions (location-bound, desktop-only approval).
//! 3. **Admin Console** — owner vs. admin over billing and members, with a
//!    tenant custom role loaded from TOML layered on top.
//!
//! All data is hardcoded and fictional. No external systems are contacted.

pub mod mock_data;
pub mod scenarios;
