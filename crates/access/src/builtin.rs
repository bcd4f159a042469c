//! The platform's authored access-control tables
//!
//! Everything in this module is reviewed data, not computed behavior: adding
//! a role or permission, changing what a role is granted, or widening who
//! may assign a role is an edit here, reviewed like any other deploy-time
//! change. `AccessPolicy::builtin` assembles and validates these tables at
//! startup.

use crate::assign::{AssignScope, AssignmentPolicy, AssignmentRule};
use crate::error::Result;
use crate::grant::{BindingTable, PermissionGrant, RoleBinding};
use crate::locale::Localized;
use crate::permission::{PermissionCatalog, PermissionDef};
use crate::role::{RoleDef, RoleRegistry};

/// Unrestricted platform owner (the wildcard role)
pub const SYSTEM_ADMIN: &str = "system_admin";
/// Newsroom administrator
pub const ADMIN: &str = "admin";
/// Editor: reviews, edits, and publishes
pub const EDITOR: &str = "editor";
/// Reporter: writes and submits own articles
pub const REPORTER: &str = "reporter";
/// Comments moderator
pub const COMMENTS_MODERATOR: &str = "comments_moderator";
/// Media library manager
pub const MEDIA_MANAGER: &str = "media_manager";
/// Registered reader, no editorial permissions
pub const READER: &str = "reader";

const ROLES: &[RoleDef] = &[
    RoleDef::new(
        SYSTEM_ADMIN,
        Localized::new("مدير النظام", "System Administrator"),
        Localized::new(
            "صلاحية كاملة وغير مقيدة على جميع أجزاء المنصة",
            "Full, unrestricted access to every part of the platform",
        ),
    ),
    RoleDef::new(
        ADMIN,
        Localized::new("مدير", "Administrator"),
        Localized::new(
            "يدير المحتوى والمستخدمين والإعدادات في غرفة الأخبار",
            "Manages content, users, and settings across the newsroom",
        ),
    ),
    RoleDef::new(
        EDITOR,
        Localized::new("محرر", "Editor"),
        Localized::new(
            "يراجع المقالات ويحررها وينشرها",
            "Reviews, edits, and publishes articles",
        ),
    ),
    RoleDef::new(
        REPORTER,
        Localized::new("مراسل", "Reporter"),
        Localized::new(
            "يكتب المقالات ويرسلها للمراجعة",
            "Writes articles and submits them for review",
        ),
    ),
    RoleDef::new(
        COMMENTS_MODERATOR,
        Localized::new("مشرف التعليقات", "Comments Moderator"),
        Localized::new(
            "يشرف على تعليقات القراء",
            "Moderates reader comments",
        ),
    ),
    RoleDef::new(
        MEDIA_MANAGER,
        Localized::new("مدير الوسائط", "Media Manager"),
        Localized::new(
            "يدير مكتبة الصور والوسائط",
            "Manages the image and media library",
        ),
    ),
    RoleDef::new(
        READER,
        Localized::new("قارئ", "Reader"),
        Localized::new(
            "قارئ مسجل دون أي صلاحيات تحريرية",
            "Registered reader with no editorial permissions",
        ),
    ),
];

const PERMISSIONS: &[PermissionDef] = &[
    // Articles
    PermissionDef::new("articles.view", Localized::new("عرض المقالات", "View articles")),
    PermissionDef::new("articles.create", Localized::new("إنشاء المقالات", "Create articles")),
    PermissionDef::new(
        "articles.edit_own",
        Localized::new("تعديل المقالات الخاصة", "Edit own articles"),
    ),
    PermissionDef::new(
        "articles.edit_all",
        Localized::new("تعديل جميع المقالات", "Edit any article"),
    ),
    PermissionDef::new(
        "articles.delete_own",
        Localized::new("حذف المقالات الخاصة", "Delete own articles"),
    ),
    PermissionDef::new(
        "articles.delete_all",
        Localized::new("حذف جميع المقالات", "Delete any article"),
    ),
    PermissionDef::new("articles.publish", Localized::new("نشر المقالات", "Publish articles")),
    PermissionDef::new(
        "articles.schedule",
        Localized::new("جدولة المقالات", "Schedule articles"),
    ),
    PermissionDef::new(
        "articles.review",
        Localized::new("مراجعة المقالات المرسلة", "Review submitted articles"),
    ),
    // Categories
    PermissionDef::new("categories.view", Localized::new("عرض التصنيفات", "View categories")),
    PermissionDef::new(
        "categories.create",
        Localized::new("إنشاء التصنيفات", "Create categories"),
    ),
    PermissionDef::new("categories.edit", Localized::new("تعديل التصنيفات", "Edit categories")),
    PermissionDef::new(
        "categories.delete",
        Localized::new("حذف التصنيفات", "Delete categories"),
    ),
    // Users
    PermissionDef::new("users.view", Localized::new("عرض المستخدمين", "View users")),
    PermissionDef::new("users.create", Localized::new("إنشاء المستخدمين", "Create users")),
    PermissionDef::new("users.edit", Localized::new("تعديل المستخدمين", "Edit users")),
    PermissionDef::new("users.delete", Localized::new("حذف المستخدمين", "Delete users")),
    PermissionDef::new(
        "users.manage_roles",
        Localized::new("إدارة أدوار المستخدمين", "Manage user roles"),
    ),
    // Comments
    PermissionDef::new("comments.view", Localized::new("عرض التعليقات", "View comments")),
    PermissionDef::new(
        "comments.view_own",
        Localized::new("عرض التعليقات الخاصة", "View own comments"),
    ),
    PermissionDef::new(
        "comments.approve",
        Localized::new("اعتماد التعليقات", "Approve comments"),
    ),
    PermissionDef::new("comments.reject", Localized::new("رفض التعليقات", "Reject comments")),
    PermissionDef::new("comments.delete", Localized::new("حذف التعليقات", "Delete comments")),
    PermissionDef::new(
        "comments.ban_user",
        Localized::new("حظر المعلقين", "Ban commenters"),
    ),
    // Media
    PermissionDef::new(
        "media.view",
        Localized::new("عرض مكتبة الوسائط", "View media library"),
    ),
    PermissionDef::new("media.upload", Localized::new("رفع الوسائط", "Upload media")),
    PermissionDef::new("media.edit", Localized::new("تعديل الوسائط", "Edit media")),
    PermissionDef::new("media.delete", Localized::new("حذف الوسائط", "Delete media")),
    PermissionDef::new(
        "media.organize",
        Localized::new("تنظيم مجلدات الوسائط", "Organize media folders"),
    ),
    // Settings
    PermissionDef::new("settings.view", Localized::new("عرض الإعدادات", "View settings")),
    PermissionDef::new("settings.edit", Localized::new("تعديل الإعدادات", "Edit settings")),
    // Analytics
    PermissionDef::new("analytics.view", Localized::new("عرض التحليلات", "View analytics")),
    PermissionDef::new(
        "analytics.export",
        Localized::new("تصدير التحليلات", "Export analytics"),
    ),
    // Tags
    PermissionDef::new("tags.view", Localized::new("عرض الوسوم", "View tags")),
    PermissionDef::new("tags.create", Localized::new("إنشاء الوسوم", "Create tags")),
    PermissionDef::new("tags.edit", Localized::new("تعديل الوسوم", "Edit tags")),
    PermissionDef::new("tags.delete", Localized::new("حذف الوسوم", "Delete tags")),
    // System
    PermissionDef::new(
        "system.backup",
        Localized::new("إدارة النسخ الاحتياطية", "Manage backups"),
    ),
    PermissionDef::new("system.logs", Localized::new("عرض سجلات النظام", "View system logs")),
    PermissionDef::new(
        "system.maintenance",
        Localized::new("تنفيذ مهام الصيانة", "Run maintenance tasks"),
    ),
];

const BINDINGS: &[RoleBinding] = &[
    RoleBinding::new(SYSTEM_ADMIN, PermissionGrant::All),
    // Everything except system.*
    RoleBinding::new(
        ADMIN,
        PermissionGrant::Codes(&[
            "articles.view",
            "articles.create",
            "articles.edit_own",
            "articles.edit_all",
            "articles.delete_own",
            "articles.delete_all",
            "articles.publish",
            "articles.schedule",
            "articles.review",
            "categories.view",
            "categories.create",
            "categories.edit",
            "categories.delete",
            "users.view",
            "users.create",
            "users.edit",
            "users.delete",
            "users.manage_roles",
            "comments.view",
            "comments.view_own",
            "comments.approve",
            "comments.reject",
            "comments.delete",
            "comments.ban_user",
            "media.view",
            "media.upload",
            "media.edit",
            "media.delete",
            "media.organize",
            "settings.view",
            "settings.edit",
            "analytics.view",
            "analytics.export",
            "tags.view",
            "tags.create",
            "tags.edit",
            "tags.delete",
        ]),
    ),
    RoleBinding::new(
        EDITOR,
        PermissionGrant::Codes(&[
            "articles.view",
            "articles.create",
            "articles.edit_own",
            "articles.edit_all",
            "articles.delete_own",
            "articles.publish",
            "articles.schedule",
            "articles.review",
            "categories.view",
            "categories.create",
            "categories.edit",
            "tags.view",
            "tags.create",
            "tags.edit",
            "media.view",
            "media.upload",
            "media.edit",
            "comments.view",
            "analytics.view",
        ]),
    ),
    RoleBinding::new(
        REPORTER,
        PermissionGrant::Codes(&[
            "articles.view",
            "articles.create",
            "articles.edit_own",
            "articles.delete_own",
            "media.view",
            "media.upload",
            "tags.view",
            "comments.view_own",
        ]),
    ),
    RoleBinding::new(
        COMMENTS_MODERATOR,
        PermissionGrant::Codes(&[
            "comments.view",
            "comments.approve",
            "comments.reject",
            "comments.delete",
            "comments.ban_user",
        ]),
    ),
    RoleBinding::new(
        MEDIA_MANAGER,
        PermissionGrant::Codes(&[
            "media.view",
            "media.upload",
            "media.edit",
            "media.delete",
            "media.organize",
        ]),
    ),
    RoleBinding::new(READER, PermissionGrant::Codes(&[])),
];

// Only the two administrative roles may assign roles at all. Kept as a
// literal table so a new role never gains assignment power implicitly.
const ASSIGNMENT_RULES: &[AssignmentRule] = &[
    AssignmentRule::new(SYSTEM_ADMIN, AssignScope::AnyRole),
    AssignmentRule::new(ADMIN, AssignScope::AnyRoleExcept(&[SYSTEM_ADMIN])),
];

/// The authored role registry
pub(crate) fn registry() -> Result<RoleRegistry> {
    RoleRegistry::new(ROLES.to_vec())
}

/// The authored permission catalog
pub(crate) fn catalog() -> Result<PermissionCatalog> {
    PermissionCatalog::new(PERMISSIONS.to_vec())
}

/// The authored role-permission bindings
pub(crate) fn bindings() -> Result<BindingTable> {
    BindingTable::new(BINDINGS.to_vec())
}

/// The authored assignment rules
pub(crate) fn assignment_rules() -> Result<AssignmentPolicy> {
    AssignmentPolicy::new(ASSIGNMENT_RULES.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_assemble() {
        assert_eq!(registry().unwrap().len(), 7);
        assert_eq!(catalog().unwrap().len(), 40);
        bindings().unwrap();
        assignment_rules().unwrap();
    }

    #[test]
    fn test_every_role_is_bound() {
        let registry = registry().unwrap();
        let bindings = bindings().unwrap();
        for def in registry.roles() {
            assert!(
                bindings.grant(def.name).is_ok(),
                "role '{}' has no binding",
                def.name
            );
        }
    }

    #[test]
    fn test_only_system_admin_is_wildcard() {
        let bindings = bindings().unwrap();
        let wildcards: Vec<_> = bindings
            .roles()
            .filter(|r| bindings.grant(r).unwrap().is_all())
            .collect();
        assert_eq!(wildcards, vec![SYSTEM_ADMIN]);
    }

    #[test]
    fn test_admin_is_everything_but_system() {
        let catalog = catalog().unwrap();
        let bindings = bindings().unwrap();
        let admin = bindings.permissions_for(ADMIN, &catalog).unwrap();

        for code in catalog.codes() {
            if code.starts_with("system.") {
                assert!(!admin.contains(code), "admin unexpectedly granted {code}");
            } else {
                assert!(admin.contains(code), "admin missing {code}");
            }
        }
    }
}
