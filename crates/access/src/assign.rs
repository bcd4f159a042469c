//! Role-assignment authorization
//!
//! Decides whether one role may grant another role to a user. The rules are
//! a small authored table rather than a numeric level comparison: escalation
//! bugs are high-severity, and a literal table can be reviewed line by line.
//! A role with no rule can assign nothing.

use std::collections::HashMap;

use crate::error::{AccessError, Result};

/// Which target roles an assigner may grant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignScope {
    /// May assign any registered role
    AnyRole,
    /// May assign any registered role except the listed ones
    AnyRoleExcept(&'static [&'static str]),
}

/// One authored rule row
#[derive(Debug, Clone, Copy)]
pub struct AssignmentRule {
    /// The acting role
    pub assigner: &'static str,
    /// The targets it may grant
    pub scope: AssignScope,
}

impl AssignmentRule {
    /// Create a rule row
    pub const fn new(assigner: &'static str, scope: AssignScope) -> Self {
        Self { assigner, scope }
    }
}

/// The role-assignment decision table
///
/// A pure decision function over `(assigner, target)`; no side effects and
/// no persistence. The caller applies the decision and audits it.
#[derive(Debug, Clone)]
pub struct AssignmentPolicy {
    rules: HashMap<&'static str, AssignScope>,
}

impl AssignmentPolicy {
    /// Build the table from authored rows
    ///
    /// Fails if an assigner has more than one rule.
    pub fn new(rules: Vec<AssignmentRule>) -> Result<Self> {
        let mut table = HashMap::with_capacity(rules.len());
        for rule in rules {
            if table.insert(rule.assigner, rule.scope).is_some() {
                return Err(AccessError::DuplicateAssignmentRule {
                    role: rule.assigner.to_string(),
                });
            }
        }
        Ok(Self { rules: table })
    }

    /// Roles that have a rule (iteration order is unspecified)
    pub fn assigners(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    /// The scope for an assigner, if it has a rule
    pub fn scope(&self, assigner: &str) -> Option<&AssignScope> {
        self.rules.get(assigner)
    }

    /// All role names referenced by the rules, for registry validation
    pub(crate) fn referenced_roles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().flat_map(|(&assigner, scope)| {
            let exceptions = match *scope {
                AssignScope::AnyRole => &[][..],
                AssignScope::AnyRoleExcept(roles) => roles,
            };
            std::iter::once(assigner).chain(exceptions.iter().copied())
        })
    }

    /// Whether `assigner` may grant `target`
    ///
    /// Both names are assumed registered; `AccessPolicy::can_assign` checks
    /// that first and fails closed on unknown names.
    pub fn allows(&self, assigner: &str, target: &str) -> bool {
        match self.rules.get(assigner) {
            Some(AssignScope::AnyRole) => true,
            Some(AssignScope::AnyRoleExcept(denied)) => !denied.iter().any(|d| *d == target),
            None => false,
        }
    }
}
