//! Permission definitions and the permission catalog
//!
//! A permission code is an atomic `<resource>.<action>` capability string,
//! e.g. `articles.publish`. The catalog is the closed list of codes the
//! platform knows about; bindings and resolved permission sets only ever
//! contain catalog entries.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::{AccessError, Result};
use crate::locale::{Locale, Localized};

/// A permission definition: code plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionDef {
    /// Capability code of the form `<resource>.<action>`
    pub code: &'static str,
    /// Display label per locale
    pub label: Localized,
}

impl PermissionDef {
    /// Create a permission definition
    pub const fn new(code: &'static str, label: Localized) -> Self {
        Self { code, label }
    }
}

/// The fixed list of permission codes, grouped by resource on demand
///
/// Iteration order is declaration order. Codes are validated at construction:
/// a code without a `.` separator (or with an empty resource or action part)
/// is an authoring mistake and fails the build of the catalog, it is never
/// silently grouped under an empty resource.
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    defs: Vec<PermissionDef>,
    index: HashMap<&'static str, usize>,
}

impl PermissionCatalog {
    /// Build a catalog from authored definitions
    ///
    /// Fails on duplicate or malformed codes.
    pub fn new(defs: Vec<PermissionDef>) -> Result<Self> {
        let mut index = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            split_code(def.code)?;
            if index.insert(def.code, i).is_some() {
                return Err(AccessError::DuplicatePermission {
                    code: def.code.to_string(),
                });
            }
        }
        Ok(Self { defs, index })
    }

    /// All permission codes, in declaration order
    pub fn permissions(&self) -> impl Iterator<Item = &PermissionDef> {
        self.defs.iter()
    }

    /// All codes, in declaration order
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defs.iter().map(|d| d.code)
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Whether a code is in the catalog
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Look up a permission by code
    pub fn get(&self, code: &str) -> Result<&PermissionDef> {
        self.index
            .get(code)
            .map(|&i| &self.defs[i])
            .ok_or_else(|| AccessError::unknown_permission(code))
    }

    /// Display label for a code in the given locale
    pub fn label(&self, code: &str, locale: Locale) -> Result<&'static str> {
        Ok(self.get(code)?.label.get(locale))
    }

    /// Group codes by resource domain
    ///
    /// Splits each code on its first `.`; every catalog entry lands in
    /// exactly one bucket. Used by permission-management screens.
    pub fn group_by_resource(&self) -> BTreeMap<&'static str, Vec<&'static str>> {
        let mut groups: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        for def in &self.defs {
            // Codes were validated at construction, split cannot fail
            let (resource, _) = split_code(def.code).expect("validated at construction");
            groups.entry(resource).or_default().push(def.code);
        }
        groups
    }
}

/// Split a permission code into `(resource, action)` on the first `.`
pub(crate) fn split_code(code: &'static str) -> Result<(&'static str, &'static str)> {
    match code.split_once('.') {
        Some((resource, action)) if !resource.is_empty() && !action.is_empty() => {
            Ok((resource, action))
        }
        _ => Err(AccessError::invalid_code(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(code: &'static str) -> PermissionDef {
        PermissionDef::new(code, Localized::new("", ""))
    }

    fn catalog() -> PermissionCatalog {
        PermissionCatalog::new(vec![
            def("articles.view"),
            def("articles.publish"),
            def("comments.approve"),
        ])
        .unwrap()
    }

    #[test]
    fn test_declaration_order() {
        let codes: Vec<_> = catalog().codes().collect();
        assert_eq!(
            codes,
            vec!["articles.view", "articles.publish", "comments.approve"]
        );
    }

    #[test]
    fn test_lookup() {
        let cat = catalog();
        assert!(cat.contains("articles.publish"));
        assert!(!cat.contains("articles.fly"));
        assert!(matches!(
            cat.get("articles.fly"),
            Err(AccessError::UnknownPermission { .. })
        ));
    }

    #[test]
    fn test_malformed_code_fails_at_construction() {
        let err = PermissionCatalog::new(vec![def("publish")]).unwrap_err();
        assert!(matches!(err, AccessError::InvalidPermissionCode { .. }));

        let err = PermissionCatalog::new(vec![def(".publish")]).unwrap_err();
        assert!(matches!(err, AccessError::InvalidPermissionCode { .. }));

        let err = PermissionCatalog::new(vec![def("articles.")]).unwrap_err();
        assert!(matches!(err, AccessError::InvalidPermissionCode { .. }));
    }

    #[test]
    fn test_duplicate_code_fails() {
        let err =
            PermissionCatalog::new(vec![def("articles.view"), def("articles.view")]).unwrap_err();
        assert!(matches!(err, AccessError::DuplicatePermission { .. }));
    }

    #[test]
    fn test_group_by_resource_partitions() {
        let cat = catalog();
        let groups = cat.group_by_resource();
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups["articles"],
            vec!["articles.view", "articles.publish"]
        );
        assert_eq!(groups["comments"], vec!["comments.approve"]);

        // No loss, no duplication
        let total: usize = groups.values().map(|v| v.len()).sum();
        assert_eq!(total, cat.len());
    }

    #[test]
    fn test_split_on_first_dot() {
        // An action containing a dot groups under the first segment
        let cat = PermissionCatalog::new(vec![def("articles.meta.edit")]).unwrap();
        let groups = cat.group_by_resource();
        assert_eq!(groups["articles"], vec!["articles.meta.edit"]);
    }
}
