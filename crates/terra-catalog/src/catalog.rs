//! The permission catalog: the closed vocabulary of every permission the
//! system knows about, grouped by resource.
//!
//! The catalog is the single source of truth. Every permission a role may
//! carry must appear here; custom-role validation enforces that at create
//! time. It is built once on first use and never mutated.

use std::collections::HashSet;
use std::sync::OnceLock;

use terra_contracts::permission::{Action, Permission, Resource, Scope};

// Shorthand for the entry table below.
const fn s(resource: Resource, action: Action, scope: Scope) -> Permission {
    Permission::scoped(resource, action, scope)
}

const fn u(resource: Resource, action: Action) -> Permission {
    Permission::unscoped(resource, action)
}

/// Every permission in the system, in catalog order, with its description.
///
/// Order is meaningful: listings and the owner role's permission list both
/// follow it. Grouped by resource, scoped entries narrowest scope first.
const ENTRIES: &[(Permission, &str)] = &[
    // Clients
    (s(Resource::Clients, Action::View, Scope::Own), "View clients you own"),
    (s(Resource::Clients, Action::View, Scope::Team), "View clients owned by your team"),
    (s(Resource::Clients, Action::View, Scope::All), "View every client in the tenant"),
    (u(Resource::Clients, Action::Create), "Create new clients"),
    (s(Resource::Clients, Action::Update, Scope::Own), "Edit clients you own"),
    (s(Resource::Clients, Action::Update, Scope::Team), "Edit clients owned by your team"),
    (s(Resource::Clients, Action::Update, Scope::All), "Edit every client in the tenant"),
    (s(Resource::Clients, Action::Delete, Scope::Own), "Delete clients you own"),
    (s(Resource::Clients, Action::Delete, Scope::Team), "Delete clients owned by your team"),
    (s(Resource::Clients, Action::Delete, Scope::All), "Delete any client in the tenant"),
    (u(Resource::Clients, Action::Export), "Export client lists"),
    (s(Resource::Clients, Action::Assign, Scope::Team), "Reassign clients within your team"),
    // Deals
    (s(Resource::Deals, Action::View, Scope::Own), "View deals you own"),
    (s(Resource::Deals, Action::View, Scope::Team), "View deals owned by your team"),
    (s(Resource::Deals, Action::View, Scope::All), "View every deal in the tenant"),
    (u(Resource::Deals, Action::Create), "Create new deals"),
    (s(Resource::Deals, Action::Update, Scope::Own), "Edit deals you own"),
    (s(Resource::Deals, Action::Update, Scope::Team), "Edit deals owned by your team"),
    (s(Resource::Deals, Action::Update, Scope::All), "Edit every deal in the tenant"),
    (s(Resource::Deals, Action::Delete, Scope::Own), "Delete deals you own"),
    (s(Resource::Deals, Action::Delete, Scope::All), "Delete any deal in the tenant"),
    (u(Resource::Deals, Action::Approve), "Approve deals for closing"),
    // Tasks
    (s(Resource::Tasks, Action::View, Scope::Own), "View tasks assigned to you"),
    (s(Resource::Tasks, Action::View, Scope::Team), "View your team's tasks"),
    (u(Resource::Tasks, Action::Create), "Create new tasks"),
    (s(Resource::Tasks, Action::Update, Scope::Own), "Edit tasks assigned to you"),
    (s(Resource::Tasks, Action::Update, Scope::Team), "Edit your team's tasks"),
    (s(Resource::Tasks, Action::Delete, Scope::Own), "Delete tasks assigned to you"),
    (s(Resource::Tasks, Action::Delete, Scope::Team), "Delete your team's tasks"),
    (s(Resource::Tasks, Action::Assign, Scope::Team), "Assign tasks within your team"),
    // Members
    (s(Resource::Members, Action::View, Scope::All), "View the tenant's member list"),
    (u(Resource::Members, Action::Manage), "Manage members: roles, teams, deactivation"),
    (u(Resource::Members, Action::Invite), "Invite new members to the tenant"),
    // Billing
    (u(Resource::Billing, Action::View), "View the tenant's plan and invoices"),
    (u(Resource::Billing, Action::Manage), "Change plans and payment methods"),
    // Settings
    (u(Resource::Settings, Action::View), "View tenant settings"),
    (u(Resource::Settings, Action::Manage), "Change tenant settings"),
    // Audit logs
    (u(Resource::AuditLogs, Action::View), "View the tenant audit log"),
    // Reports
    (s(Resource::Reports, Action::View, Scope::Own), "View reports over your own records"),
    (s(Resource::Reports, Action::View, Scope::Team), "View reports over your team's records"),
    (s(Resource::Reports, Action::View, Scope::All), "View tenant-wide reports"),
    (u(Resource::Reports, Action::Export), "Export report data"),
    // Messages
    (s(Resource::Messages, Action::View, Scope::Own), "View your conversations"),
    (s(Resource::Messages, Action::View, Scope::Team), "View your team's conversations"),
    (u(Resource::Messages, Action::Create), "Send messages"),
    (s(Resource::Messages, Action::Delete, Scope::Own), "Delete your own messages"),
];

/// One catalog entry: a permission and its human-readable description.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub permission: Permission,
    pub description: &'static str,
}

/// The complete, immutable permission vocabulary.
///
/// Obtain the process-wide instance via [`catalog`].
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashSet<Permission>,
}

impl Catalog {
    fn build() -> Self {
        let entries: Vec<CatalogEntry> = ENTRIES
            .iter()
            .map(|&(permission, description)| CatalogEntry { permission, description })
            .collect();
        let index = entries.iter().map(|e| e.permission).collect();
        Self { entries, index }
    }

    /// All entries, in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All permissions, in catalog order.
    pub fn permissions(&self) -> impl Iterator<Item = &Permission> {
        self.entries.iter().map(|e| &e.permission)
    }

    /// Entries for a single resource, in catalog order.
    pub fn for_resource(&self, resource: Resource) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.permission.resource == resource)
    }

    /// Return true if `permission` is part of the vocabulary.
    pub fn contains(&self, permission: &Permission) -> bool {
        self.index.contains(permission)
    }

    /// The description of a catalog permission, or `None` if it is not one.
    pub fn describe(&self, permission: &Permission) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.permission == *permission)
            .map(|e| e.description)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The process-wide catalog, built on first access.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}
