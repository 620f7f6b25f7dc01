//! # terra-catalog
//!
//! The permission catalog and role registry for the TERRA engine.
//!
//! ## Overview
//!
//! This crate owns the two static foundations of the permission model:
//!
//! - the **catalog** — the closed vocabulary of permission strings, built
//!   once at first use and immutable for the process lifetime;
//! - the **system roles** — the five built-in roles (owner, admin, manager,
//!   agent, viewer), each derived from the catalog.
//!
//! On top of those it defines the registry contract for tenant custom
//! roles: the [`RoleProvider`] seam to external storage, the listing merge
//! order, create-time validation, and a TOML source for role fixtures.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use terra_catalog::{catalog, system_roles, resolve_permission_set};
//!
//! let owner = &system_roles()[0];
//! assert_eq!(owner.permissions.len(), catalog().len());
//! ```

pub mod catalog;
pub mod registry;
pub mod roles;
pub mod source;

pub use catalog::{catalog, Catalog, CatalogEntry};
pub use registry::{
    list_roles, resolve_permission_set, role_permissions, validate_custom_role,
    InMemoryRoleStore, RoleProvider,
};
pub use roles::{system_role, system_roles, SystemRole};
pub use source::roles_from_toml_str;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use terra_contracts::error::TerraError;
    use terra_contracts::permission::{Action, Permission, Scope};
    use terra_contracts::role::{CustomRole, Role, SystemRoleKind, TenantId};

    use crate::catalog::catalog;
    use crate::registry::{
        list_roles, resolve_permission_set, role_permissions, validate_custom_role,
        InMemoryRoleStore, RoleProvider,
    };
    use crate::roles::{system_role, system_roles};
    use crate::source::roles_from_toml_str;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Parse a canonical permission string, panicking on typos in the test
    /// itself.
    fn perm(token: &str) -> Permission {
        token.parse().unwrap()
    }

    fn tenant() -> TenantId {
        TenantId::new("tenant-harborview")
    }

    fn custom(name: &str, permissions: &[&str]) -> CustomRole {
        CustomRole::new(
            tenant(),
            name,
            "",
            permissions.iter().map(|t| perm(t)).collect(),
        )
    }

    // ── 1. catalog integrity ──────────────────────────────────────────────────

    /// Every catalog entry is unique and round-trips through its canonical
    /// string form.
    #[test]
    fn test_catalog_entries_unique_and_round_trip() {
        let cat = catalog();
        assert!(!cat.is_empty());

        let mut seen = std::collections::HashSet::new();
        for entry in cat.entries() {
            assert!(
                seen.insert(entry.permission),
                "duplicate catalog entry: {}",
                entry.permission
            );
            let round: Permission = entry.permission.to_string().parse().unwrap();
            assert_eq!(round, entry.permission);
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn test_catalog_contains_and_describe() {
        let cat = catalog();
        let approve = perm("DEALS_APPROVE");
        assert!(cat.contains(&approve));
        assert!(cat.describe(&approve).is_some());

        // Structurally valid but deliberately not part of the vocabulary.
        let absent = Permission::scoped(
            terra_contracts::permission::Resource::Billing,
            Action::Delete,
            Scope::Team,
        );
        assert!(!cat.contains(&absent));
        assert!(cat.describe(&absent).is_none());
    }

    #[test]
    fn test_catalog_for_resource_grouping() {
        let cat = catalog();
        let clients: Vec<_> = cat
            .for_resource(terra_contracts::permission::Resource::Clients)
            .collect();
        assert!(clients.iter().any(|e| e.permission == perm("CLIENTS_VIEW_OWN")));
        assert!(clients.iter().all(|e| {
            e.permission.resource == terra_contracts::permission::Resource::Clients
        }));
    }

    // ── 2. system roles ───────────────────────────────────────────────────────

    /// Exactly five system roles, in the fixed listing order.
    #[test]
    fn test_system_roles_are_five_in_order() {
        let roles = system_roles();
        assert_eq!(roles.len(), 5);
        let kinds: Vec<SystemRoleKind> = roles.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, SystemRoleKind::ALL);
    }

    /// The owner role's permission list is structurally equal to the
    /// catalog, order included.
    #[test]
    fn test_owner_equals_full_catalog() {
        let owner = system_role(SystemRoleKind::Owner);
        let catalog_permissions: Vec<Permission> = catalog().permissions().copied().collect();
        assert_eq!(owner.permissions, catalog_permissions);
    }

    /// Only the owner manages billing.
    #[test]
    fn test_admin_excludes_billing_manage() {
        let admin = system_role(SystemRoleKind::Admin);
        assert!(!admin.permissions.contains(&perm("BILLING_MANAGE")));
        assert!(admin.permissions.contains(&perm("BILLING_VIEW")));
        assert_eq!(admin.permissions.len(), catalog().len() - 1);
    }

    /// Viewer holds exactly the read-only, self-scope entries.
    #[test]
    fn test_viewer_is_read_only_own_scope() {
        let viewer = system_role(SystemRoleKind::Viewer);
        assert!(viewer.permissions.contains(&perm("CLIENTS_VIEW_OWN")));
        assert!(!viewer.permissions.contains(&perm("CLIENTS_CREATE")));
        for permission in &viewer.permissions {
            assert_eq!(permission.action, Action::View, "viewer must be read-only");
            assert_eq!(permission.scope, Some(Scope::Own), "viewer must be self-scope");
        }
    }

    /// Agents can create but not unilaterally destroy tenant-wide data.
    #[test]
    fn test_agent_creates_but_no_tenant_wide_deletes() {
        let agent = system_role(SystemRoleKind::Agent);
        assert!(agent.permissions.contains(&perm("CLIENTS_CREATE")));
        assert!(!agent.permissions.contains(&perm("CLIENTS_DELETE_ALL")));
        for permission in &agent.permissions {
            assert!(
                !(permission.action == Action::Delete && permission.scope == Some(Scope::All)),
                "agent must not hold {}",
                permission
            );
            assert_ne!(permission.action, Action::Manage, "agent must not hold {}", permission);
        }
    }

    /// Managers approve deals and run a team, but hold no MANAGE action and
    /// no tenant-wide destructive scope.
    #[test]
    fn test_manager_team_lead_shape() {
        let manager = system_role(SystemRoleKind::Manager);
        assert!(manager.permissions.contains(&perm("DEALS_APPROVE")));
        assert!(manager.permissions.contains(&perm("MEMBERS_INVITE")));
        assert!(manager.permissions.contains(&perm("CLIENTS_VIEW_TEAM")));
        assert!(!manager.permissions.contains(&perm("MEMBERS_MANAGE")));
        assert!(!manager.permissions.contains(&perm("CLIENTS_DELETE_ALL")));
        assert!(!manager.permissions.contains(&perm("BILLING_MANAGE")));
    }

    /// No system role carries a permission outside the catalog.
    #[test]
    fn test_system_roles_stay_within_catalog() {
        for role in system_roles() {
            for permission in &role.permissions {
                assert!(
                    catalog().contains(permission),
                    "{} carries non-catalog permission {}",
                    role.kind.name(),
                    permission
                );
            }
        }
    }

    // ── 3. registry listing and resolution ────────────────────────────────────

    /// System roles are prepended, in order, before tenant custom roles.
    #[test]
    fn test_list_roles_merge_order() {
        let store = InMemoryRoleStore::new();
        store.insert(custom("listing-coordinator", &["CLIENTS_VIEW_TEAM"])).unwrap();
        store.insert(custom("closer", &["DEALS_VIEW_TEAM", "DEALS_APPROVE"])).unwrap();

        let merged = list_roles(&store, &tenant(), true).unwrap();
        assert_eq!(merged.len(), 7);
        assert!(merged[..5].iter().all(Role::is_system));
        assert_eq!(merged[5].name(), "listing-coordinator");
        assert_eq!(merged[6].name(), "closer");

        let custom_only = list_roles(&store, &tenant(), false).unwrap();
        assert_eq!(custom_only.len(), 2);
        assert!(custom_only.iter().all(|r| !r.is_system()));
    }

    /// Soft-deleted roles keep their row but disappear from listings.
    #[test]
    fn test_list_roles_excludes_soft_deleted() {
        let store = InMemoryRoleStore::new();
        let role = custom("seasonal", &["TASKS_VIEW_OWN"]);
        let role_id = role.id.clone();
        store.insert(role).unwrap();

        assert_eq!(list_roles(&store, &tenant(), false).unwrap().len(), 1);

        store.soft_delete(&tenant(), &role_id).unwrap();
        assert!(list_roles(&store, &tenant(), false).unwrap().is_empty());

        // The row itself is still in storage.
        assert_eq!(store.custom_roles(&tenant()).unwrap().len(), 1);

        // Deleting twice is an UnknownRole error: the live row is gone.
        assert!(matches!(
            store.soft_delete(&tenant(), &role_id),
            Err(TerraError::UnknownRole { .. })
        ));
    }

    /// A caller's roles flatten into the union of their permissions.
    #[test]
    fn test_resolve_permission_set_is_union() {
        let roles = vec![
            Role::System(SystemRoleKind::Viewer),
            Role::Custom(custom("closer", &["DEALS_APPROVE", "DEALS_VIEW_TEAM"])),
        ];
        let set = resolve_permission_set(&roles);

        assert!(set.has(&perm("CLIENTS_VIEW_OWN"))); // from viewer
        assert!(set.has(&perm("DEALS_APPROVE"))); // from the custom role
        let viewer_len = role_permissions(&roles[0]).len();
        assert_eq!(set.len(), viewer_len + 2);
    }

    // ── 4. custom-role validation ─────────────────────────────────────────────

    #[test]
    fn test_validation_rejects_reserved_and_empty_names() {
        let reserved = custom("Owner", &["CLIENTS_VIEW_OWN"]);
        assert!(matches!(
            validate_custom_role(&reserved, &[]),
            Err(TerraError::ReservedRoleName { .. })
        ));

        let empty = custom("   ", &["CLIENTS_VIEW_OWN"]);
        assert!(matches!(
            validate_custom_role(&empty, &[]),
            Err(TerraError::InvalidRole { .. })
        ));
    }

    /// Name collisions are case-insensitive within a tenant, but a role
    /// never collides with itself (updates must pass) or with a deleted row.
    #[test]
    fn test_validation_name_collision_rules() {
        let existing = custom("Closers", &["DEALS_VIEW_TEAM"]);

        let colliding = custom("closers", &["TASKS_VIEW_OWN"]);
        assert!(matches!(
            validate_custom_role(&colliding, std::slice::from_ref(&existing)),
            Err(TerraError::RoleNameCollision { .. })
        ));

        // Same id: this is an update of the existing role, not a collision.
        let mut update = existing.clone();
        update.permissions = vec![perm("DEALS_VIEW_TEAM"), perm("DEALS_APPROVE")];
        assert!(validate_custom_role(&update, std::slice::from_ref(&existing)).is_ok());

        // A deleted role's name is free for reuse.
        let mut deleted = existing.clone();
        deleted.deleted_at = Some(chrono::Utc::now());
        assert!(validate_custom_role(&colliding, std::slice::from_ref(&deleted)).is_ok());
    }

    /// Every permission must exist in the catalog, exactly once.
    #[test]
    fn test_validation_rejects_non_catalog_and_duplicate_permissions() {
        // BILLING_DELETE_TEAM parses (all tokens are valid) but is not a
        // catalog entry.
        let mut role = custom("billing-experiment", &[]);
        role.permissions = vec![Permission::scoped(
            terra_contracts::permission::Resource::Billing,
            Action::Delete,
            Scope::Team,
        )];
        assert!(matches!(
            validate_custom_role(&role, &[]),
            Err(TerraError::InvalidRole { .. })
        ));

        let duplicated = custom("dup", &["TASKS_VIEW_OWN", "TASKS_VIEW_OWN"]);
        assert!(matches!(
            validate_custom_role(&duplicated, &[]),
            Err(TerraError::InvalidRole { .. })
        ));
    }

    // ── 5. TOML role source ───────────────────────────────────────────────────

    #[test]
    fn test_roles_from_toml_valid_document() {
        let doc = r##"
            [[roles]]
            name = "listing-coordinator"
            description = "Preps listings for the whole team"
            permissions = ["CLIENTS_VIEW_TEAM", "CLIENTS_UPDATE_TEAM", "TASKS_VIEW_TEAM"]
            color = "#2f6f4e"

            [[roles]]
            name = "closer"
            permissions = ["DEALS_VIEW_TEAM", "DEALS_APPROVE"]
        "##;

        let roles = roles_from_toml_str(&tenant(), doc).unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].name, "listing-coordinator");
        assert_eq!(roles[0].color.as_deref(), Some("#2f6f4e"));
        assert_eq!(roles[0].permissions.len(), 3);
        assert!(roles[1].permissions.contains(&perm("DEALS_APPROVE")));
        assert!(roles.iter().all(|r| !r.is_deleted()));
    }

    /// Malformed TOML must produce a `ConfigError`.
    #[test]
    fn test_roles_from_toml_parse_error() {
        let result = roles_from_toml_str(&tenant(), "this is not valid toml ][[[");
        match result {
            Err(TerraError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse role TOML"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    /// A typo in a permission string fails the whole document.
    #[test]
    fn test_roles_from_toml_unknown_permission() {
        let doc = r#"
            [[roles]]
            name = "typo"
            permissions = ["CLIENTS_VEIW_OWN"]
        "#;
        assert!(matches!(
            roles_from_toml_str(&tenant(), doc),
            Err(TerraError::UnknownPermission { .. })
        ));
    }

    /// Two roles with the same name in one document collide.
    #[test]
    fn test_roles_from_toml_duplicate_names() {
        let doc = r#"
            [[roles]]
            name = "closer"
            permissions = ["DEALS_APPROVE"]

            [[roles]]
            name = "Closer"
            permissions = ["DEALS_VIEW_TEAM"]
        "#;
        assert!(matches!(
            roles_from_toml_str(&tenant(), doc),
            Err(TerraError::RoleNameCollision { .. })
        ));
    }
}
