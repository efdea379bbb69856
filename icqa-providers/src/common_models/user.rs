//! Staff identity types. Credential material never appears here; it stays
//! inside the session gate's stored record.

use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

use super::macros::{impl_display, impl_from};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);
impl_display!(UserId);
impl_from!(UserId; Uuid);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[strum(serialize = "ADMIN")]
    Admin,
    #[strum(serialize = "STAFF")]
    Staff,
    #[strum(serialize = "GUEST")]
    Guest,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// Typed partial update for the profile fields a signed-in user may edit.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl UserPatch {
    pub fn apply_to(self, user: &mut User) {
        if let Some(value) = self.email {
            user.email = value;
        }
        if let Some(value) = self.name {
            user.name = value;
        }
    }
}
