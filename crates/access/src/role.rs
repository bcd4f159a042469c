//! Role definitions and the role registry
//!
//! Roles are fixed at deploy time: the registry is built once at startup from
//! authored definitions and never mutated. Callers refer to roles by machine
//! name (the stable key stored on user records); labels and descriptions are
//! display-only.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{AccessError, Result};
use crate::locale::{Locale, Localized};

/// A role definition: stable machine name plus display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleDef {
    /// Machine name, e.g. `"editor"` (the key stored on user records)
    pub name: &'static str,
    /// Display label per locale
    pub label: Localized,
    /// Description per locale
    pub description: Localized,
}

impl RoleDef {
    /// Create a role definition
    pub const fn new(name: &'static str, label: Localized, description: Localized) -> Self {
        Self {
            name,
            label,
            description,
        }
    }
}

/// The fixed set of roles known to the platform
///
/// Iteration order is declaration order and is stable across calls within a
/// deployment. There is no mutation API; construct once and inject wherever
/// role lookups are needed.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    defs: Vec<RoleDef>,
    index: HashMap<&'static str, usize>,
}

impl RoleRegistry {
    /// Build a registry from authored definitions
    ///
    /// Fails on duplicate role names.
    pub fn new(defs: Vec<RoleDef>) -> Result<Self> {
        let mut index = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            if index.insert(def.name, i).is_some() {
                return Err(AccessError::DuplicateRole {
                    role: def.name.to_string(),
                });
            }
        }
        Ok(Self { defs, index })
    }

    /// All roles, in declaration order
    pub fn roles(&self) -> impl Iterator<Item = &RoleDef> {
        self.defs.iter()
    }

    /// Number of registered roles
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Whether a role name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a role by machine name
    pub fn get(&self, name: &str) -> Result<&RoleDef> {
        self.index
            .get(name)
            .map(|&i| &self.defs[i])
            .ok_or_else(|| AccessError::unknown_role(name))
    }

    /// Display label for a role in the given locale
    pub fn label(&self, name: &str, locale: Locale) -> Result<&'static str> {
        Ok(self.get(name)?.label.get(locale))
    }

    /// Description for a role in the given locale
    pub fn description(&self, name: &str, locale: Locale) -> Result<&'static str> {
        Ok(self.get(name)?.description.get(locale))
    }
}
