//! Sabq - Access control
//!
//! Role and permission model for the Sabq newsroom platform.
//!
//! # Overview
//!
//! Static RBAC over authored tables: a fixed role registry, a catalog of
//! `<resource>.<action>` permission codes, a role → permission binding table
//! with one wildcard role, and a literal role-assignment decision table.
//!
//! | Role | Grants |
//! |------|--------|
//! | `system_admin` | everything (wildcard, tracks catalog growth) |
//! | `admin` | everything except `system.*` |
//! | `editor` | article workflow, categories, tags, media editing |
//! | `reporter` | own-article workflow, media upload |
//! | `comments_moderator` | comment moderation |
//! | `media_manager` | media library |
//! | `reader` | nothing |
//!
//! # Usage
//!
//! Build the policy once at startup ([`AccessPolicy::builtin`] validates the
//! tables and fails on any authoring mistake - abort startup on `Err`), then
//! share it freely; every query is a pure read.
//!
//! ```
//! use sabq_access::{AccessPolicy, EDITOR};
//!
//! let policy = AccessPolicy::builtin().expect("authored tables are valid");
//!
//! let perms = policy.resolve([EDITOR]).unwrap();
//! assert!(perms.has("articles.publish"));
//! assert!(!perms.has("users.manage_roles"));
//!
//! assert!(!policy.can_assign(EDITOR, "reporter").unwrap());
//! ```
//!
//! Role and permission names are plain strings at the API boundary because
//! they arrive from session records and admin requests; unknown names are
//! always an error ([`AccessError::UnknownRole`]), never silently skipped,
//! so a typo can neither under- nor over-grant unnoticed.

mod assign;
mod builtin;
mod context;
mod error;
mod grant;
mod locale;
mod permission;
mod policy;
mod resolve;
mod role;


pub use error::{AccessError, Result};
pub use locale::{Locale, Localized};

// Tables
pub use grant::{BindingTable, PermissionGrant, RoleBinding};
pub use permission::{PermissionCatalog, PermissionDef};
pub use role::{RoleDef, RoleRegistry};

// Decisions
pub use assign::{AssignScope, AssignmentPolicy, AssignmentRule};
pub use policy::AccessPolicy;
pub use resolve::PermissionSet;

// Request-scoped view
pub use context::{AccessContext, Principal};

// Builtin role names
pub use builtin::{
    ADMIN, COMMENTS_MODERATOR, EDITOR, MEDIA_MANAGER, READER, REPORTER, SYSTEM_ADMIN,
};
