//! Static site metadata and the synthetic admin account.
//!
//! Neither is file-backed. The admin user exists so that admin screens
//! written against a user API keep working; writes against it are
//! accepted and discarded.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub github: &'static str,
    pub weibo: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub footer: &'static str,
    pub contact_info: ContactInfo,
}

pub const SITE_INFO: SiteInfo = SiteInfo {
    title: "ZhouYou",
    description: "Personal website",
    footer: "ZhouYou © 2025 | <a href=\"https://beian.miit.gov.cn/\" target=\"_blank\" rel=\"noopener noreferrer\">豫ICP备2407930208号-1</a>",
    contact_info: ContactInfo {
        email: "contact@ZhouYou.net",
        github: "https://github.com/ZhouYou",
        weibo: "https://weibo.com/ZhouYou",
    },
};

/// Id of the only user the API ever reports.
pub const ADMIN_USER_ID: DbId = 1;

/// Id reported back by `add_user`. Nothing is stored under it.
pub const NEXT_USER_ID: DbId = 2;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub nickname: &'static str,
    pub bio: &'static str,
    pub status: &'static str,
    pub last_login: String,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// The admin record, with every timestamp set to `now`.
    pub fn admin(now: Timestamp) -> Self {
        let stamp = crate::types::format_timestamp(now);
        Self {
            id: ADMIN_USER_ID,
            username: "admin",
            email: "admin@example.com",
            role: "admin",
            avatar: "",
            nickname: "Administrator",
            bio: "System administrator",
            status: "active",
            last_login: stamp.clone(),
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }
}
