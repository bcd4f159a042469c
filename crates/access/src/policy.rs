//! The access policy façade
//!
//! [`AccessPolicy`] owns the four immutable tables (role registry, permission
//! catalog, binding table, assignment rules) and answers every runtime
//! question: effective permissions for a set of held roles, and whether one
//! role may assign another.
//!
//! Construction runs the cross-table validation: a binding or assignment
//! rule that references an unregistered role, a grant of an uncataloged
//! code, or a registry role with no binding is a deploy-time authoring
//! mistake. `new` returns `Err` and the process must not start serving;
//! `?` the constructor from `main`.
//!
//! All tables are read-only after construction, so a policy can be shared
//! across request handlers (e.g. behind an `Arc`) without locking.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::assign::AssignmentPolicy;
use crate::builtin;
use crate::error::{AccessError, Result};
use crate::grant::{BindingTable, PermissionGrant};
use crate::permission::PermissionCatalog;
use crate::resolve::PermissionSet;
use crate::role::RoleRegistry;

/// Validated, immutable access-control tables
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    registry: RoleRegistry,
    catalog: PermissionCatalog,
    bindings: BindingTable,
    assignment: AssignmentPolicy,
}

impl AccessPolicy {
    /// Assemble and validate a policy from its tables
    ///
    /// Fails on any cross-table inconsistency. Intended to run once,
    /// synchronously, before the process serves its first request.
    pub fn new(
        registry: RoleRegistry,
        catalog: PermissionCatalog,
        bindings: BindingTable,
        assignment: AssignmentPolicy,
    ) -> Result<Self> {
        // Every binding must name a registered role and cataloged codes
        for role in bindings.roles() {
            if !registry.contains(role) {
                return Err(AccessError::UnknownRoleInBinding {
                    role: role.to_string(),
                });
            }
            if let PermissionGrant::Codes(codes) = bindings.grant(role)? {
                for code in *codes {
                    if !catalog.contains(code) {
                        return Err(AccessError::unknown_permission_in_binding(role, *code));
                    }
                }
            }
        }

        // Every registered role must be bound
        for def in registry.roles() {
            if bindings.grant(def.name).is_err() {
                return Err(AccessError::UnboundRole {
                    role: def.name.to_string(),
                });
            }
        }

        // Assignment rules may only reference registered roles
        for role in assignment.referenced_roles() {
            if !registry.contains(role) {
                return Err(AccessError::UnknownRoleInAssignmentRule {
                    role: role.to_string(),
                });
            }
        }

        debug!(
            roles = registry.len(),
            permissions = catalog.len(),
            "access policy validated"
        );

        Ok(Self {
            registry,
            catalog,
            bindings,
            assignment,
        })
    }

    /// The platform's authored tables
    pub fn builtin() -> Result<Self> {
        Self::new(
            builtin::registry()?,
            builtin::catalog()?,
            builtin::bindings()?,
            builtin::assignment_rules()?,
        )
    }

    /// The role registry
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// The permission catalog
    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    /// The permission set granted to a single role
    ///
    /// The wildcard role's set is read from the catalog at call time.
    pub fn permissions_for(&self, role: &str) -> Result<PermissionSet> {
        let codes = self.bindings.permissions_for(role, &self.catalog)?;
        Ok(PermissionSet::from(codes))
    }

    /// The effective permission set for a collection of held roles
    ///
    /// The union of each role's grant, deduplicated. If any held role
    /// carries the wildcard grant the result is the full catalog and no
    /// partial unions are computed. An empty input resolves to the empty
    /// set. Any unknown role name fails with [`AccessError::UnknownRole`] -
    /// even when a wildcard role is also held - since an unknown name in a
    /// principal's role set always indicates a misconfiguration.
    pub fn resolve<'a, I>(&self, roles: I) -> Result<PermissionSet>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut grants = Vec::new();
        for role in roles {
            match self.bindings.grant(role) {
                Ok(grant) => grants.push(grant),
                Err(err) => {
                    warn!(role, "resolve called with unknown role");
                    return Err(err);
                }
            }
        }

        if grants.iter().any(|g| g.is_all()) {
            return Ok(self.catalog.codes().collect());
        }

        let mut union: BTreeSet<&'static str> = BTreeSet::new();
        for grant in grants {
            if let PermissionGrant::Codes(codes) = grant {
                union.extend(codes.iter().copied());
            }
        }
        Ok(PermissionSet::from(union))
    }

    /// Whether the held roles grant a permission code
    ///
    /// Convenience for route guards: resolve + membership in one call.
    pub fn allows<'a, I>(&self, roles: I, code: &str) -> Result<bool>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Ok(self.resolve(roles)?.has(code))
    }

    /// Whether `assigner` may grant `target` to another user
    ///
    /// Fails closed: an unregistered name on either side is
    /// [`AccessError::UnknownRole`], never a silent allow. For registered
    /// names the decision comes from the assignment table and never errors.
    pub fn can_assign(&self, assigner: &str, target: &str) -> Result<bool> {
        for role in [assigner, target] {
            if !self.registry.contains(role) {
                warn!(role, "assignment check with unknown role");
                return Err(AccessError::unknown_role(role));
            }
        }
        Ok(self.assignment.allows(assigner, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::{AssignScope, AssignmentRule};
    use crate::grant::RoleBinding;
    use crate::locale::Localized;
    use crate::permission::PermissionDef;
    use crate::role::RoleDef;

    fn role(name: &'static str) -> RoleDef {
        RoleDef::new(name, Localized::new("", ""), Localized::new("", ""))
    }

    fn perm(code: &'static str) -> PermissionDef {
        PermissionDef::new(code, Localized::new("", ""))
    }

    #[test]
    fn test_binding_with_unknown_role_fails_startup() {
        let err = AccessPolicy::new(
            RoleRegistry::new(vec![]).unwrap(),
            PermissionCatalog::new(vec![]).unwrap(),
            BindingTable::new(vec![RoleBinding::new("ghost", PermissionGrant::All)]).unwrap(),
            AssignmentPolicy::new(vec![]).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, AccessError::UnknownRoleInBinding { .. }));
    }

    #[test]
    fn test_binding_with_unknown_permission_fails_startup() {
        let err = AccessPolicy::new(
            RoleRegistry::new(vec![role("editor")]).unwrap(),
            PermissionCatalog::new(vec![perm("articles.view")]).unwrap(),
            BindingTable::new(vec![RoleBinding::new(
                "editor",
                PermissionGrant::Codes(&["articles.fly"]),
            )])
            .unwrap(),
            AssignmentPolicy::new(vec![]).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, AccessError::UnknownPermissionInBinding { .. }));
    }

    #[test]
    fn test_unbound_role_fails_startup() {
        let err = AccessPolicy::new(
            RoleRegistry::new(vec![role("editor")]).unwrap(),
            PermissionCatalog::new(vec![]).unwrap(),
            BindingTable::new(vec![]).unwrap(),
            AssignmentPolicy::new(vec![]).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, AccessError::UnboundRole { .. }));
    }

    #[test]
    fn test_assignment_rule_with_unknown_role_fails_startup() {
        let err = AccessPolicy::new(
            RoleRegistry::new(vec![role("editor")]).unwrap(),
            PermissionCatalog::new(vec![]).unwrap(),
            BindingTable::new(vec![RoleBinding::new(
                "editor",
                PermissionGrant::Codes(&[]),
            )])
            .unwrap(),
            AssignmentPolicy::new(vec![AssignmentRule::new("ghost", AssignScope::AnyRole)])
                .unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, AccessError::UnknownRoleInAssignmentRule { .. }));
    }

    #[test]
    fn test_resolve_unknown_role_fails_even_with_wildcard() {
        let policy = AccessPolicy::new(
            RoleRegistry::new(vec![role("root")]).unwrap(),
            PermissionCatalog::new(vec![perm("articles.view")]).unwrap(),
            BindingTable::new(vec![RoleBinding::new("root", PermissionGrant::All)]).unwrap(),
            AssignmentPolicy::new(vec![]).unwrap(),
        )
        .unwrap();

        let err = policy.resolve(["root", "ghost"]).unwrap_err();
        assert!(matches!(err, AccessError::UnknownRole { .. }));
    }
}
