use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type UserId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Owner,
    Admin,
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: UserRole,
}

impl User {
    pub fn new(name: String, email: String, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            avatar: String::new(),
            role,
        }
    }

    pub fn with_avatar(mut self, avatar: String) -> Self {
        self.avatar = avatar;
        self
    }

    /// First character of the display name, used when no avatar is available.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
