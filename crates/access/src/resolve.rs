//! Resolved permission sets
//!
//! [`PermissionSet`] is what the resolver returns: the deduplicated union of
//! the codes granted by every role a principal holds. Route handlers check
//! membership with [`PermissionSet::has`] before performing a protected
//! action.

use std::collections::BTreeSet;

use serde::Serialize;

/// An effective permission set
///
/// Derived, never stored: recomputed from the role tables on demand.
/// Serializes as a sorted list of codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionSet {
    codes: BTreeSet<&'static str>,
}

impl PermissionSet {
    /// The empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the set grants a permission code
    pub fn has(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Iterate the codes in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codes.iter().copied()
    }

    /// Number of granted codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether no codes are granted
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl From<BTreeSet<&'static str>> for PermissionSet {
    fn from(codes: BTreeSet<&'static str>) -> Self {
        Self { codes }
    }
}

impl FromIterator<&'static str> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = PermissionSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.has("articles.view"));
    }

    #[test]
    fn test_membership() {
        let set: PermissionSet = ["articles.view", "articles.publish"].into_iter().collect();
        assert!(set.has("articles.view"));
        assert!(!set.has("comments.view"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_dedup() {
        let set: PermissionSet = ["articles.view", "articles.view"].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serializes_sorted() {
        let set: PermissionSet = ["comments.view", "articles.view"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"articles.view\",\"comments.view\"]");
    }
}
