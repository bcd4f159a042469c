//! Access-control error types

use thiserror::Error;

/// Result type for access-control operations
pub type Result<T> = std::result::Result<T, AccessError>;

/// Errors that can occur when building or querying the access policy
///
/// Runtime variants (`UnknownRole`, `UnknownPermission`, `UnknownLocale`)
/// are fatal to the calling operation and must never be swallowed: silently
/// skipping an unknown role in a permission union could either under-grant
/// or over-grant without any operator signal.
///
/// The remaining variants are construction-time authoring mistakes. They are
/// only returned while assembling the tables and must abort process startup.
#[derive(Debug, Error)]
pub enum AccessError {
    /// A role name is not in the role registry
    #[error("unknown role '{role}'")]
    UnknownRole {
        /// The unregistered role name
        role: String,
    },

    /// A permission code is not in the permission catalog
    #[error("unknown permission '{code}'")]
    UnknownPermission {
        /// The unregistered permission code
        code: String,
    },

    /// A locale tag has no supported locale
    #[error("unsupported locale '{locale}'")]
    UnknownLocale {
        /// The unsupported locale tag
        locale: String,
    },

    /// Registry construction - the same role name declared twice
    #[error("duplicate role '{role}' in registry")]
    DuplicateRole {
        /// The duplicated role name
        role: String,
    },

    /// Catalog construction - the same permission code declared twice
    #[error("duplicate permission '{code}' in catalog")]
    DuplicatePermission {
        /// The duplicated permission code
        code: String,
    },

    /// Catalog construction - a code is not of the form `<resource>.<action>`
    #[error("invalid permission code '{code}': expected '<resource>.<action>'")]
    InvalidPermissionCode {
        /// The malformed permission code
        code: String,
    },

    /// Binding construction - the same role bound twice
    #[error("duplicate binding for role '{role}'")]
    DuplicateBinding {
        /// The role with more than one binding
        role: String,
    },

    /// Policy validation - a registered role has no binding
    #[error("role '{role}' has no permission binding")]
    UnboundRole {
        /// The role missing from the binding table
        role: String,
    },

    /// Policy validation - a binding names a role the registry doesn't know
    #[error("binding references unknown role '{role}'")]
    UnknownRoleInBinding {
        /// The unregistered role name
        role: String,
    },

    /// Policy validation - a binding grants a code the catalog doesn't know
    #[error("binding for role '{role}' grants unknown permission '{code}'")]
    UnknownPermissionInBinding {
        /// The bound role
        role: String,
        /// The unregistered permission code
        code: String,
    },

    /// Assignment policy construction - two rules for the same assigner
    #[error("duplicate assignment rule for role '{role}'")]
    DuplicateAssignmentRule {
        /// The role with more than one rule
        role: String,
    },

    /// Policy validation - an assignment rule names an unregistered role
    #[error("assignment rule references unknown role '{role}'")]
    UnknownRoleInAssignmentRule {
        /// The unregistered role name
        role: String,
    },
}

impl AccessError {
    /// Create an UnknownRole error
    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole { role: role.into() }
    }

    /// Create an UnknownPermission error
    pub fn unknown_permission(code: impl Into<String>) -> Self {
        Self::UnknownPermission { code: code.into() }
    }

    /// Create an UnknownLocale error
    pub fn unknown_locale(locale: impl Into<String>) -> Self {
        Self::UnknownLocale {
            locale: locale.into(),
        }
    }

    /// Create an InvalidPermissionCode error
    pub fn invalid_code(code: impl Into<String>) -> Self {
        Self::InvalidPermissionCode { code: code.into() }
    }

    /// Create an UnknownPermissionInBinding error
    pub fn unknown_permission_in_binding(
        role: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self::UnknownPermissionInBinding {
            role: role.into(),
            code: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_message() {
        let err = AccessError::unknown_role("superuser_typo");
        assert!(err.to_string().contains("superuser_typo"));
        assert!(err.to_string().contains("unknown role"));
    }

    #[test]
    fn test_unknown_permission_message() {
        let err = AccessError::unknown_permission("articles.fly");
        assert!(err.to_string().contains("articles.fly"));
    }

    #[test]
    fn test_unknown_locale_message() {
        let err = AccessError::unknown_locale("fr");
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn test_invalid_code_message() {
        let err = AccessError::invalid_code("publish");
        assert!(err.to_string().contains("publish"));
        assert!(err.to_string().contains("<resource>.<action>"));
    }

    #[test]
    fn test_binding_error_messages() {
        let err = AccessError::UnboundRole {
            role: "editor".to_string(),
        };
        assert!(err.to_string().contains("editor"));
        assert!(err.to_string().contains("no permission binding"));

        let err = AccessError::unknown_permission_in_binding("editor", "articles.fly");
        assert!(err.to_string().contains("editor"));
        assert!(err.to_string().contains("articles.fly"));
    }
}
