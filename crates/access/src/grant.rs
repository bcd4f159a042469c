//! Role-permission bindings
//!
//! The binding table is authored data: each role maps to either an explicit
//! list of permission codes or to [`PermissionGrant::All`], the wildcard
//! grant. The wildcard is a tagged variant, not a sentinel string mixed into
//! a code list, and it expands against the catalog at evaluation time: a
//! code added to the catalog is granted to the wildcard role with no binding
//! change.

use std::collections::{BTreeSet, HashMap};

use crate::error::{AccessError, Result};
use crate::permission::PermissionCatalog;

/// What a role is granted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionGrant {
    /// Every code in the catalog, including codes added later
    All,
    /// An explicit, finite list of codes
    Codes(&'static [&'static str]),
}

impl PermissionGrant {
    /// Whether this is the wildcard grant
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// One authored binding row
#[derive(Debug, Clone, Copy)]
pub struct RoleBinding {
    /// Role machine name
    pub role: &'static str,
    /// What the role is granted
    pub grant: PermissionGrant,
}

impl RoleBinding {
    /// Create a binding row
    pub const fn new(role: &'static str, grant: PermissionGrant) -> Self {
        Self { role, grant }
    }
}

/// The static role → grant table
///
/// Built once at startup. Cross-checks against the role registry and the
/// permission catalog are done by `AccessPolicy::new`, which owns all the
/// tables; this type only enforces its local invariant (one binding per
/// role).
#[derive(Debug, Clone)]
pub struct BindingTable {
    grants: HashMap<&'static str, PermissionGrant>,
}

impl BindingTable {
    /// Build the table from authored rows
    ///
    /// Fails if a role is bound more than once.
    pub fn new(bindings: Vec<RoleBinding>) -> Result<Self> {
        let mut grants = HashMap::with_capacity(bindings.len());
        for binding in bindings {
            if grants.insert(binding.role, binding.grant).is_some() {
                return Err(AccessError::DuplicateBinding {
                    role: binding.role.to_string(),
                });
            }
        }
        Ok(Self { grants })
    }

    /// Bound role names (iteration order is unspecified)
    pub fn roles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.grants.keys().copied()
    }

    /// The raw grant for a role
    pub fn grant(&self, role: &str) -> Result<&PermissionGrant> {
        self.grants
            .get(role)
            .ok_or_else(|| AccessError::unknown_role(role))
    }

    /// The effective permission set for a role
    ///
    /// Explicit grants return their codes; the wildcard grant returns every
    /// code currently in `catalog`.
    pub fn permissions_for(
        &self,
        role: &str,
        catalog: &PermissionCatalog,
    ) -> Result<BTreeSet<&'static str>> {
        match self.grant(role)? {
            PermissionGrant::All => Ok(catalog.codes().collect()),
            PermissionGrant::Codes(codes) => Ok(codes.iter().copied().collect()),
        }
    }
}
