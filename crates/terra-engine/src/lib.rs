//! # terra-engine
//!
//! The TERRA permission checker and contextual policy evaluator.
//!
//! ## Overview
//!
//! Route handlers ask this crate yes/no authorization questions before
//! touching data. The engine is purely functional: every check is a total
//! function of the caller's resolved [`PermissionSet`], the typed
//! [`Permission`] in question, and (for contextual checks) the request
//! context and call-site conditions. There is no I/O, no shared mutable
//! state, and no error path for "access denied" — a denial is `false`, and
//! translating that into a 403 is the caller's job.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use terra_engine::{checker, resources::DealPermissions};
//!
//! if !DealPermissions::can_approve(&session.permissions) {
//!     return forbidden();
//! }
//! ```
//!
//! [`PermissionSet`]: terra_contracts::permission::PermissionSet
//! [`Permission`]: terra_contracts::permission::Permission

pub mod checker;
pub mod policy;
pub mod resources;

pub use checker::{
    can_access_resource, has_all_permissions, has_any_permission, has_permission,
    permission_level, AccessLevel,
};
pub use policy::has_contextual_permission;

// ── Tests ─────────────────────────────────────────────────────────────────────
