//! # terra-contracts
//!
//! Shared types and contracts for the TERRA permission engine.
//!
//! All crates in the workspace import from here. No authorization logic
//! lives in this crate — only data definitions and error types: the typed
//! permission model, role shapes, request context, and conditions.

pub mod context;
pub mod error;
pub mod permission;
pub mod role;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::context::{ConditionOperator, DeviceType, PermissionCondition, RequestContext, UserId};
    use crate::error::TerraError;
    use crate::permission::{Action, Permission, PermissionSet, Resource, Scope};
    use crate::role::{CustomRole, Role, SystemRoleKind, TenantId};

    // ── Permission string form ───────────────────────────────────────────────

    #[test]
    fn permission_display_scoped_and_unscoped() {
        let scoped = Permission::scoped(Resource::Clients, Action::View, Scope::Own);
        assert_eq!(scoped.to_string(), "CLIENTS_VIEW_OWN");

        let unscoped = Permission::unscoped(Resource::Clients, Action::Create);
        assert_eq!(unscoped.to_string(), "CLIENTS_CREATE");
    }

    /// The resource token itself may contain an underscore; parsing must not
    /// split on the first `_` blindly.
    #[test]
    fn permission_parse_multi_token_resource() {
        let parsed: Permission = "AUDIT_LOGS_VIEW".parse().unwrap();
        assert_eq!(parsed, Permission::unscoped(Resource::AuditLogs, Action::View));
    }

    #[test]
    fn permission_parse_is_inverse_of_display() {
        let samples = [
            Permission::scoped(Resource::Deals, Action::Update, Scope::Team),
            Permission::scoped(Resource::Reports, Action::View, Scope::All),
            Permission::unscoped(Resource::Deals, Action::Approve),
            Permission::unscoped(Resource::Billing, Action::Manage),
            Permission::scoped(Resource::Tasks, Action::Assign, Scope::Team),
        ];
        for permission in samples {
            let round: Permission = permission.to_string().parse().unwrap();
            assert_eq!(round, permission);
        }
    }

    /// Anything outside the closed vocabulary is a construction-time error,
    /// not a silently-never-matching string.
    #[test]
    fn permission_parse_rejects_unknown_tokens() {
        for bad in ["CLIENTS_VEIW_OWN", "LISTINGS_VIEW_OWN", "CLIENTS", "CLIENTS_", "", "clients_view_own"] {
            match bad.parse::<Permission>() {
                Err(TerraError::UnknownPermission { token }) => assert_eq!(token, bad),
                other => panic!("expected UnknownPermission for '{bad}', got {other:?}"),
            }
        }
    }

    #[test]
    fn permission_serializes_as_canonical_string() {
        let permission = Permission::scoped(Resource::Messages, Action::View, Scope::Team);
        let encoded = serde_json::to_string(&permission).unwrap();
        assert_eq!(encoded, "\"MESSAGES_VIEW_TEAM\"");

        let decoded: Permission = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, permission);

        assert!(serde_json::from_str::<Permission>("\"NOT_A_PERMISSION\"").is_err());
    }

    // ── PermissionSet ────────────────────────────────────────────────────────

    #[test]
    fn permission_set_grant_and_has() {
        let mut set = PermissionSet::new();
        let view = Permission::scoped(Resource::Clients, Action::View, Scope::Own);
        let create = Permission::unscoped(Resource::Clients, Action::Create);

        assert!(set.is_empty());
        assert!(!set.has(&view));

        set.grant(view);
        assert!(set.has(&view));
        assert!(!set.has(&create));

        // Duplicate grants collapse.
        set.grant(view);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn permission_set_parse_all_rejects_the_whole_batch_on_one_typo() {
        let ok = PermissionSet::parse_all(["CLIENTS_VIEW_OWN", "DEALS_APPROVE"]).unwrap();
        assert_eq!(ok.len(), 2);

        let err = PermissionSet::parse_all(["CLIENTS_VIEW_OWN", "DEALS_APPROV"]);
        assert!(matches!(err, Err(TerraError::UnknownPermission { .. })));
    }

    // ── Roles ────────────────────────────────────────────────────────────────

    #[test]
    fn system_role_kinds_are_five_in_fixed_order() {
        let names: Vec<&str> = SystemRoleKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["owner", "admin", "manager", "agent", "viewer"]);
    }

    #[test]
    fn role_accessors_distinguish_system_from_custom() {
        let system = Role::System(SystemRoleKind::Manager);
        assert_eq!(system.name(), "manager");
        assert!(system.is_system());
        assert!(system.tenant_id().is_none());

        let custom = Role::Custom(CustomRole::new(
            TenantId::new("tenant-1"),
            "listing-coordinator",
            "Coordinates listings",
            vec![Permission::scoped(Resource::Clients, Action::View, Scope::Team)],
        ));
        assert_eq!(custom.name(), "listing-coordinator");
        assert!(!custom.is_system());
        assert_eq!(custom.tenant_id().unwrap().0, "tenant-1");
    }

    #[test]
    fn custom_role_soft_delete_flag() {
        let mut role = CustomRole::new(TenantId::new("tenant-1"), "temp", "", vec![]);
        assert!(!role.is_deleted());
        role.deleted_at = Some(chrono::Utc::now());
        assert!(role.is_deleted());
    }

    // ── RequestContext field resolution ──────────────────────────────────────

    #[test]
    fn context_field_resolves_known_names() {
        let ctx = RequestContext::new(UserId::new("user-7"), TenantId::new("tenant-1"))
            .with_teams(["team-east"])
            .with_location("US")
            .with_device(DeviceType::Mobile);

        assert_eq!(ctx.field("user_id"), Some(json!("user-7")));
        assert_eq!(ctx.field("tenant_id"), Some(json!("tenant-1")));
        assert_eq!(ctx.field("team_ids"), Some(json!(["team-east"])));
        assert_eq!(ctx.field("location"), Some(json!("US")));
        assert_eq!(ctx.field("device_type"), Some(json!("mobile")));
    }

    /// Unknown names and unset optional fields both resolve to `None`; the
    /// evaluator treats either as a failed condition.
    #[test]
    fn context_field_unknown_or_unset_is_none() {
        let ctx = RequestContext::new(UserId::new("user-7"), TenantId::new("tenant-1"));
        assert_eq!(ctx.field("ip_address"), None);
        assert_eq!(ctx.field("location"), None);
        assert_eq!(ctx.field("device_type"), None);
    }

    #[test]
    fn condition_operator_rejects_malformed_strings_at_deserialization() {
        let ok: PermissionCondition =
            serde_json::from_value(json!({ "field": "location", "operator": "eq", "value": "US" }))
                .unwrap();
        assert_eq!(ok.operator, ConditionOperator::Eq);

        let bad = serde_json::from_value::<PermissionCondition>(
            json!({ "field": "location", "operator": "matches", "value": "US" }),
        );
        assert!(bad.is_err());
    }

    // ── Error display ────────────────────────────────────────────────────────

    #[test]
    fn error_messages_carry_context() {
        let err = TerraError::UnknownPermission { token: "CLIENTS_FROB".to_string() };
        assert!(err.to_string().contains("CLIENTS_FROB"));

        let err = TerraError::RoleNameCollision { name: "closers".to_string() };
        assert!(err.to_string().contains("closers"));

        let err = TerraError::ReservedRoleName { name: "owner".to_string() };
        assert!(err.to_string().contains("reserved"));
    }
}
