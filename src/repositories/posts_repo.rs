use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    models::posts::{Post, PostWithCommentCount},
    Result,
};

use super::PostgresRepo;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn count_published(&self) -> Result<i64>;
    async fn list_published(&self, limit: i64, offset: i64) -> Result<Vec<Post>>;
    async fn all_published(&self) -> Result<Vec<Post>>;
    async fn most_commented(&self, count: i64) -> Result<Vec<PostWithCommentCount>>;
    async fn find_published_by_date_slug(
        &self,
        year: i32,
        month: i32,
        day: i32,
        slug: &str,
    ) -> Result<Option<Post>>;
    async fn find_published_by_id(&self, post_id: Uuid) -> Result<Option<Post>>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    async fn count_published(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM posts WHERE status = 'published'")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }

    async fn list_published(&self, limit: i64, offset: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, slug, author_id, body, publish, created_at, updated_at, status
            FROM posts
            WHERE status = 'published'
            ORDER BY publish DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn all_published(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, slug, author_id, body, publish, created_at, updated_at, status
            FROM posts
            WHERE status = 'published'
            ORDER BY publish DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn most_commented(&self, count: i64) -> Result<Vec<PostWithCommentCount>> {
        let posts = sqlx::query_as::<_, PostWithCommentCount>(
            r#"
            SELECT p.id, p.title, p.slug, p.author_id, p.body, p.publish,
                   p.created_at, p.updated_at, p.status,
                   COUNT(c.id) AS total_comments
            FROM posts p
            LEFT JOIN comments c ON c.post_id = p.id
            WHERE p.status = 'published'
            GROUP BY p.id
            ORDER BY total_comments DESC
            LIMIT $1
            "#,
        )
        .bind(count)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find_published_by_date_slug(
        &self,
        year: i32,
        month: i32,
        day: i32,
        slug: &str,
    ) -> Result<Option<Post>> {
        tracing::debug!("Fetching post {}/{}/{}/{}", year, month, day, slug);

        // At most one row can match: the slug is unique per publish day.
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, slug, author_id, body, publish, created_at, updated_at, status
            FROM posts
            WHERE status = 'published'
              AND slug = $1
              AND (publish AT TIME ZONE 'utc')::date = make_date($2, $3, $4)
            "#,
        )
        .bind(slug)
        .bind(year)
        .bind(month)
        .bind(day)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_published_by_id(&self, post_id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, slug, author_id, body, publish, created_at, updated_at, status
            FROM posts
            WHERE status = 'published' AND id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }
}
