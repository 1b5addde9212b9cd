use async_trait::async_trait;
use uuid::Uuid;

use crate::{models::comments::Comment, Result};

use super::PostgresRepo;

#[async_trait]
pub trait CommentsRepository: Sync + Send {
    async fn create_comment(
        &self,
        post_id: Uuid,
        name: &str,
        email: &str,
        body: &str,
    ) -> Result<Comment>;
    async fn active_comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>>;
}

#[async_trait]
impl CommentsRepository for PostgresRepo {
    async fn create_comment(
        &self,
        post_id: Uuid,
        name: &str,
        email: &str,
        body: &str,
    ) -> Result<Comment> {
        let id = Uuid::now_v7();

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, post_id, name, email, body)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, post_id, name, email, body, created_at, updated_at, active
            "#,
        )
        .bind(id)
        .bind(post_id)
        .bind(name)
        .bind(email)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn active_comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, name, email, body, created_at, updated_at, active
            FROM comments
            WHERE post_id = $1 AND active = TRUE
            ORDER BY created_at
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}
