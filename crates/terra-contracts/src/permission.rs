//! The typed permission model.
//!
//! A permission is a `(resource, action, optional scope)` triple with a
//! canonical string form `{RESOURCE}_{ACTION}[_{SCOPE}]`, for example
//! `CLIENTS_VIEW_OWN` or `CLIENTS_CREATE`. The string form is what roles
//! and configuration documents carry; the typed form is what the engine
//! evaluates. `Display` and `FromStr` are exact inverses: parsing accepts
//! precisely the strings rendering produces and rejects everything else.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TerraError, TerraResult};

/// A resource family in the CRM (the first token of a permission string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Clients,
    Deals,
    Tasks,
    Members,
    Billing,
    Settings,
    AuditLogs,
    Reports,
    Messages,
}

impl Resource {
    /// Every resource, in the order the catalog enumerates them.
    pub const ALL: [Resource; 9] = [
        Resource::Clients,
        Resource::Deals,
        Resource::Tasks,
        Resource::Members,
        Resource::Billing,
        Resource::Settings,
        Resource::AuditLogs,
        Resource::Reports,
        Resource::Messages,
    ];

    /// The SCREAMING_SNAKE token used in the canonical string form.
    ///
    /// `AuditLogs` renders with an internal underscore (`AUDIT_LOGS`), so
    /// parsers must match resource tokens before splitting on `_`.
    pub const fn token(&self) -> &'static str {
        match self {
            Resource::Clients => "CLIENTS",
            Resource::Deals => "DEALS",
            Resource::Tasks => "TASKS",
            Resource::Members => "MEMBERS",
            Resource::Billing => "BILLING",
            Resource::Settings => "SETTINGS",
            Resource::AuditLogs => "AUDIT_LOGS",
            Resource::Reports => "REPORTS",
            Resource::Messages => "MESSAGES",
        }
    }
}

/// An action on a resource (the second token of a permission string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
    Manage,
    Invite,
    Approve,
    Export,
    Assign,
}

impl Action {
    /// The SCREAMING_SNAKE token used in the canonical string form.
    pub const fn token(&self) -> &'static str {
        match self {
            Action::View => "VIEW",
            Action::Create => "CREATE",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
            Action::Manage => "MANAGE",
            Action::Invite => "INVITE",
            Action::Approve => "APPROVE",
            Action::Export => "EXPORT",
            Action::Assign => "ASSIGN",
        }
    }

    fn from_token(token: &str) -> Option<Action> {
        match token {
            "VIEW" => Some(Action::View),
            "CREATE" => Some(Action::Create),
            "UPDATE" => Some(Action::Update),
            "DELETE" => Some(Action::Delete),
            "MANAGE" => Some(Action::Manage),
            "INVITE" => Some(Action::Invite),
            "APPROVE" => Some(Action::Approve),
            "EXPORT" => Some(Action::Export),
            "ASSIGN" => Some(Action::Assign),
            _ => None,
        }
    }
}

/// The data-visibility scope of a scoped permission.
///
/// Scope-less permissions (e.g. `CLIENTS_CREATE`, `DEALS_APPROVE`) carry
/// `None` in [`Permission::scope`]; the action is a single gate that does
/// not vary by ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Records the caller owns.
    Own,
    /// Records owned by anyone on the caller's team(s).
    Team,
    /// Every record in the tenant.
    All,
}

impl Scope {
    /// Every scope, narrowest first.
    pub const ALL_SCOPES: [Scope; 3] = [Scope::Own, Scope::Team, Scope::All];

    /// The SCREAMING_SNAKE token used in the canonical string form.
    pub const fn token(&self) -> &'static str {
        match self {
            Scope::Own => "OWN",
            Scope::Team => "TEAM",
            Scope::All => "ALL",
        }
    }
}

/// One permission: a resource, an action, and an optional scope.
///
/// Serializes as its canonical string form, so role documents and JSON
/// payloads carry `"CLIENTS_VIEW_OWN"` rather than a nested object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permission {
    pub resource: Resource,
    pub action: Action,
    pub scope: Option<Scope>,
}

impl Permission {
    /// Construct a scoped permission, e.g. `CLIENTS_VIEW_OWN`.
    pub const fn scoped(resource: Resource, action: Action, scope: Scope) -> Self {
        Self { resource, action, scope: Some(scope) }
    }

    /// Construct a scope-less permission, e.g. `CLIENTS_CREATE`.
    pub const fn unscoped(resource: Resource, action: Action) -> Self {
        Self { resource, action, scope: None }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.resource.token(), self.action.token())?;
        if let Some(scope) = self.scope {
            write!(f, "_{}", scope.token())?;
        }
        Ok(())
    }
}

impl FromStr for Permission {
    type Err = TerraError;

    /// Parse the canonical string form.
    ///
    /// The resource token is matched first (it may itself contain `_`,
    /// as in `AUDIT_LOGS`), then a scope suffix is tried, and whatever
    /// remains must be a known action token. Any other shape is rejected
    /// with [`TerraError::UnknownPermission`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || TerraError::UnknownPermission { token: s.to_string() };

        let (resource, rest) = Resource::ALL
            .iter()
            .find_map(|r| {
                s.strip_prefix(r.token())
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| (*r, rest))
            })
            .ok_or_else(unknown)?;

        // Scope-suffixed form first; no action token ends in a scope token,
        // so the two forms cannot both match.
        for scope in Scope::ALL_SCOPES {
            if let Some(action_token) = rest
                .strip_suffix(scope.token())
                .and_then(|a| a.strip_suffix('_'))
            {
                if let Some(action) = Action::from_token(action_token) {
                    return Ok(Permission::scoped(resource, action, scope));
                }
            }
        }

        let action = Action::from_token(rest).ok_or_else(unknown)?;
        Ok(Permission::unscoped(resource, action))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}

/// The flat set of permissions attached to a request.
///
/// Resolved externally (caller roles plus tenant overrides flattened into
/// one set) and handed to every check. The engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    inner: HashSet<Permission>,
}

impl PermissionSet {
    /// An empty set. Every check against it denies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a permission to this set.
    pub fn grant(&mut self, permission: Permission) {
        self.inner.insert(permission);
    }

    /// Return true if the set contains the given permission.
    pub fn has(&self, permission: &Permission) -> bool {
        self.inner.contains(permission)
    }

    /// Iterate over all granted permissions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Parse a batch of permission strings into a set.
    ///
    /// The whole batch is rejected if any single token is unknown; this is
    /// the boundary where string-typed input becomes typed permissions.
    pub fn parse_all<I, S>(tokens: I) -> TerraResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|t| t.as_ref().parse())
            .collect::<TerraResult<_>>()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<I: IntoIterator<Item = Permission>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}
