//! TOML source for custom role definitions.
//!
//! Tenant administrators (or seed fixtures) can express custom roles as a
//! TOML document:
//!
//! ```toml
//! [[roles]]
//! name = "listing-coordinator"
//! description = "Preps listings for the whole team"
//! permissions = ["CLIENTS_VIEW_TEAM", "CLIENTS_UPDATE_TEAM", "TASKS_VIEW_TEAM"]
//! color = "#2f6f4e"
//! ```
//!
//! Parsing is strict: malformed TOML is a `ConfigError`, an unknown
//! permission string is an `UnknownPermission`, and every role passes the
//! same validation as roles created through the API.

use serde::Deserialize;
use tracing::debug;

use terra_contracts::error::{TerraError, TerraResult};
use terra_contracts::role::{CustomRole, TenantId};

use crate::registry::validate_custom_role;

/// The top-level structure deserialized from a role TOML document.
#[derive(Debug, Deserialize)]
struct RoleConfig {
    #[serde(default)]
    roles: Vec<RoleDef>,
}

/// One `[[roles]]` table. Permissions are canonical permission strings.
#[derive(Debug, Deserialize)]
struct RoleDef {
    name: String,
    #[serde(default)]
    description: String,
    permissions: Vec<String>,
    color: Option<String>,
    icon: Option<String>,
}

/// Parse `s` as a role TOML document for `tenant_id`.
///
/// Each role is validated against the catalog and against the roles that
/// precede it in the same document, so duplicate names within one document
/// are rejected too. Returned roles are live (not deleted) with fresh ids.
pub fn roles_from_toml_str(tenant_id: &TenantId, s: &str) -> TerraResult<Vec<CustomRole>> {
    let config: RoleConfig = toml::from_str(s).map_err(|e| TerraError::ConfigError {
        reason: format!("failed to parse role TOML: {}", e),
    })?;

    let mut roles: Vec<CustomRole> = Vec::with_capacity(config.roles.len());
    for def in config.roles {
        let permissions = def
            .permissions
            .iter()
            .map(|token| token.parse())
            .collect::<TerraResult<Vec<_>>>()?;

        let mut role = CustomRole::new(tenant_id.clone(), def.name, def.description, permissions);
        role.color = def.color;
        role.icon = def.icon;

        validate_custom_role(&role, &roles)?;
        debug!(tenant_id = %tenant_id, role = %role.name, permissions = role.permissions.len(), "loaded custom role from TOML");
        roles.push(role);
    }

    Ok(roles)
}
