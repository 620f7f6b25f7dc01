//! Request context and contextual permission conditions.
//!
//! A `RequestContext` carries the per-request attributes a route handler
//! knows about the caller. `PermissionCondition`s are supplied at the call
//! site and evaluated against the context by the contextual policy
//! evaluator in `terra-engine`. Conditions only ever restrict access on
//! top of a role grant; they never grant anything by themselves.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::role::TenantId;

/// Stable identifier for a user within a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The class of device a request originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
        }
    }
}

/// Per-request caller attributes, populated from the incoming request by
/// the session layer before the engine is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    pub user_id: UserId,
    pub tenant_id: TenantId,
    /// Teams the caller belongs to within the tenant.
    #[serde(default)]
    pub team_ids: BTreeSet<String>,
    /// Coarse request origin (e.g. an ISO country code), when known.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub device_type: Option<DeviceType>,
}

impl RequestContext {
    pub fn new(user_id: UserId, tenant_id: TenantId) -> Self {
        Self {
            user_id,
            tenant_id,
            team_ids: BTreeSet::new(),
            location: None,
            device_type: None,
        }
    }

    pub fn with_teams<I, S>(mut self, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team_ids = teams.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_device(mut self, device: DeviceType) -> Self {
        self.device_type = Some(device);
        self
    }

    /// Resolve a condition field name to its JSON value on this context.
    ///
    /// Returns `None` both for field names the context does not define and
    /// for optional fields that are unset; the evaluator fails closed on
    /// `None` in either case.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "user_id" => Some(json!(self.user_id.0)),
            "tenant_id" => Some(json!(self.tenant_id.0)),
            "team_ids" => Some(json!(self.team_ids)),
            "location" => self.location.as_deref().map(|l| json!(l)),
            "device_type" => self.device_type.map(|d| json!(d.as_str())),
            _ => None,
        }
    }
}

/// The comparison a condition applies between a context field and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionOperator {
    /// Exact equality (case-sensitive for strings).
    Eq,
    /// Exact inequality.
    Ne,
    /// The condition value is an array containing the context field's value.
    In,
}

/// One attribute condition layered on top of a role grant.
///
/// All conditions attached to a check must pass for the check to pass.
/// Operator strings outside eq/ne/in are rejected when the condition is
/// deserialized, so a malformed operator can never reach evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionCondition {
    /// Name of a `RequestContext` field (e.g. `"location"`).
    pub field: String,
    pub operator: ConditionOperator,
    /// The value to compare against. For `in`, a JSON array.
    pub value: Value,
}

impl PermissionCondition {
    pub fn new(field: impl Into<String>, operator: ConditionOperator, value: Value) -> Self {
        Self { field: field.into(), operator, value }
    }
}
