//! Error types for the TERRA permission engine.
//!
//! Authorization decisions themselves never error: every check returns a
//! plain `bool` and a denial is simply `false`. Errors exist only at the
//! boundaries — parsing permission strings, validating custom roles, and
//! loading role data from storage or configuration.

use thiserror::Error;

/// The unified error type for the TERRA crates.
#[derive(Debug, Error)]
pub enum TerraError {
    /// A permission string could not be parsed into the typed model.
    ///
    /// Raised at the string boundary so that typos in calling code fail
    /// loudly instead of silently never matching.
    #[error("unknown permission '{token}'")]
    UnknownPermission { token: String },

    /// A role lookup by name or id found nothing.
    #[error("unknown role '{name}'")]
    UnknownRole { name: String },

    /// A custom role's name collides with a live role in the same tenant.
    #[error("a role named '{name}' already exists in this tenant")]
    RoleNameCollision { name: String },

    /// A custom role's name shadows a built-in system role.
    #[error("role name '{name}' is reserved for a system role")]
    ReservedRoleName { name: String },

    /// A custom role failed structural validation.
    #[error("invalid role: {reason}")]
    InvalidRole { reason: String },

    /// A role configuration document is missing or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A `RoleProvider` implementation failed to load role data.
    #[error("role storage error: {reason}")]
    StorageError { reason: String },
}

/// Convenience alias used throughout the TERRA crates.
pub type TerraResult<T> = Result<T, TerraError>;
