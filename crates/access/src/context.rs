//! Request-scoped principal context
//!
//! The identity layer (sessions, JWT validation) lives outside this crate;
//! it hands us a [`Principal`] - the acting user's id and held role names.
//! [`AccessContext`] resolves that principal once and answers permission
//! checks for the rest of the request.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::policy::AccessPolicy;
use crate::resolve::PermissionSet;

/// The acting user, as supplied by the identity collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Principal {
    /// User ID
    pub id: String,

    /// Role machine names held by the user
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Principal {
    /// Create a principal with no roles
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            roles: Vec::new(),
        }
    }

    /// Create a principal holding the given roles
    pub fn with_roles<I, S>(id: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the principal holds a role
    pub fn holds(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// A principal together with its resolved permissions
///
/// Resolve once per request, then check [`can`](Self::can) as often as
/// needed without touching the tables again.
#[derive(Debug, Clone)]
pub struct AccessContext {
    /// The acting user
    pub principal: Principal,
    /// The principal's effective permission set
    pub permissions: PermissionSet,
}

impl AccessContext {
    /// Resolve a principal's permissions against a policy
    ///
    /// Fails with `UnknownRole` if the principal holds an unregistered role
    /// name - the caller should treat that as a denied request and surface
    /// the misconfiguration to operators, not to the client.
    pub fn for_principal(policy: &AccessPolicy, principal: &Principal) -> Result<Self> {
        let permissions = policy.resolve(principal.roles.iter().map(String::as_str))?;
        Ok(Self {
            principal: principal.clone(),
            permissions,
        })
    }

    /// Whether the principal is granted a permission code
    pub fn can(&self, code: &str) -> bool {
        self.permissions.has(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{COMMENTS_MODERATOR, READER};

    #[test]
    fn test_principal_roles() {
        let p = Principal::with_roles("user-1", ["editor", "comments_moderator"]);
        assert!(p.holds("editor"));
        assert!(!p.holds("admin"));

        let empty = Principal::new("user-2");
        assert!(empty.roles.is_empty());
    }

    #[test]
    fn test_context_resolves_once() {
        let policy = AccessPolicy::builtin().unwrap();
        let principal = Principal::with_roles("user-1", [COMMENTS_MODERATOR]);
        let ctx = AccessContext::for_principal(&policy, &principal).unwrap();

        assert!(ctx.can("comments.approve"));
        assert!(!ctx.can("articles.publish"));
    }

    #[test]
    fn test_context_reader_has_nothing() {
        let policy = AccessPolicy::builtin().unwrap();
        let principal = Principal::with_roles("user-2", [READER]);
        let ctx = AccessContext::for_principal(&policy, &principal).unwrap();

        assert!(ctx.permissions.is_empty());
        assert!(!ctx.can("articles.view"));
    }

    #[test]
    fn test_context_unknown_role_fails() {
        let policy = AccessPolicy::builtin().unwrap();
        let principal = Principal::with_roles("user-3", ["superuser_typo"]);
        assert!(AccessContext::for_principal(&policy, &principal).is_err());
    }

    #[test]
    fn test_principal_serde() {
        let json = r#"{"id":"user-1","roles":["editor"]}"#;
        let p: Principal = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "user-1");
        assert!(p.holds("editor"));

        // roles defaults to empty when absent
        let p: Principal = serde_json::from_str(r#"{"id":"user-2"}"#).unwrap();
        assert!(p.roles.is_empty());
    }
}
