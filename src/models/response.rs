use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    markdown::markdown_to_html,
    models::{
        comments::Comment,
        posts::{Post, PostStatus, PostWithCommentCount},
    },
};

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    /// Raw page token as requested (null when absent). The page actually
    /// fetched is `number`; the two intentionally diverge for an absent
    /// token.
    pub page: Option<String>,
    pub number: i64,
    pub num_pages: i64,
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author_id: Uuid,
    pub body: String,
    pub body_html: String,
    pub publish: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: PostStatus,
    pub comments: Vec<Comment>,
}

impl PostDetailResponse {
    pub fn new(post: Post, comments: Vec<Comment>) -> Self {
        let body_html = markdown_to_html(&post.body);
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            author_id: post.author_id,
            body: post.body,
            body_html,
            publish: post.publish,
            created_at: post.created_at,
            updated_at: post.updated_at,
            status: post.status,
            comments,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub status: &'static str,
    pub sent: bool,
}

#[derive(Debug, Serialize)]
pub struct TotalPostsResponse {
    pub total_posts: i64,
}

#[derive(Debug, Serialize)]
pub struct LatestPostsResponse {
    pub latest_posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
pub struct MostCommentedPostsResponse {
    pub most_commented_posts: Vec<PostWithCommentCount>,
}
