use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::user::{User, UserId};

pub type CommentId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub mentions: BTreeSet<UserId>,
}

impl Comment {
    /// Build a comment, resolving `@Name` mentions against `members`.
    pub fn new(author: UserId, content: String, members: &[User], now: DateTime<Utc>) -> Self {
        let mentions = Self::extract_mentions(&content, members);
        Self {
            id: Uuid::new_v4(),
            content,
            author,
            created_at: now,
            mentions,
        }
    }

    /// Members whose display name follows an `@` somewhere in `content`,
    /// compared case-insensitively.
    pub fn extract_mentions(content: &str, members: &[User]) -> BTreeSet<UserId> {
        let lowered = content.to_lowercase();
        members
            .iter()
            .filter(|member| !member.name.is_empty())
            .filter(|member| lowered.contains(&format!("@{}", member.name.to_lowercase())))
            .map(|member| member.id)
            .collect()
    }

    pub fn mentions_user(&self, user_id: UserId) -> bool {
        self.mentions.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserRole;

    fn member(name: &str) -> User {
        User::new(name.to_string(), String::new(), UserRole::Member)
    }

    #[test]
    fn test_extract_mentions() {
        let sarah = member("Sarah Wilson");
        let mike = member("Mike Chen");
        let members = vec![sarah.clone(), mike.clone()];

        let comment = Comment::new(
            mike.id,
            "Great progress! @Sarah Wilson can you review?".to_string(),
            &members,
            Utc::now(),
        );

        assert!(comment.mentions_user(sarah.id));
        assert!(!comment.mentions_user(mike.id));
        assert_eq!(comment.mentions.len(), 1);
    }

    #[test]
    fn test_mentions_case_insensitive() {
        let sarah = member("Sarah Wilson");
        let mentions = Comment::extract_mentions("ping @sarah wilson", &[sarah.clone()]);
        assert!(mentions.contains(&sarah.id));
    }

    #[test]
    fn test_name_without_at_is_not_a_mention() {
        let sarah = member("Sarah Wilson");
        let mentions = Comment::extract_mentions("Sarah Wilson said hi", &[sarah]);
        assert!(mentions.is_empty());
    }
}
