use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "post_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    // Unique per UTC publish day, not globally.
    pub slug: String,
    // Points into the external identity store.
    pub author_id: Uuid,
    pub body: String,
    pub publish: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: PostStatus,
}

impl Post {
    /// Canonical URL of the detail page, addressed by publish date and slug.
    pub fn absolute_url(&self, base_url: &str) -> String {
        format!(
            "{}/api/posts/{}/{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.publish.year(),
            self.publish.month(),
            self.publish.day(),
            self.slug
        )
    }
}

/// A published post annotated with its comment count.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct PostWithCommentCount {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author_id: Uuid,
    pub body: String,
    pub publish: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: PostStatus,
    pub total_comments: i64,
}
