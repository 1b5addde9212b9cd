use uuid::Uuid;

use crate::{
    models::{
        comments::{Comment, CreateCommentDto},
        posts::{Post, PostWithCommentCount},
    },
    pagination::{Page, Paginator, POSTS_PER_PAGE},
    repositories::{
        comments_repo::CommentsRepository, posts_repo::PostsRepository, PostgresRepo,
    },
    Error, Result,
};

/// Widget truncation used when the caller does not ask for a count.
pub const DEFAULT_WIDGET_COUNT: i64 = 5;

#[derive(Clone)]
pub struct PostsService {
    repo: PostgresRepo,
}

impl PostsService {
    pub fn new(repo: PostgresRepo) -> Self {
        Self { repo }
    }

    /// One listing page of published posts, newest first. The raw page
    /// token is normalized by the paginator; out-of-range and
    /// non-numeric tokens never error.
    pub async fn list_page(&self, page: Option<&str>) -> Result<Page<Post>> {
        let total = self.repo.count_published().await?;
        let paginator = Paginator::new(total, POSTS_PER_PAGE);

        let number = paginator.resolve(page);
        let items = self
            .repo
            .list_published(POSTS_PER_PAGE, paginator.offset(number))
            .await?;

        Ok(Page {
            items,
            number,
            num_pages: paginator.num_pages(),
        })
    }

    /// Point lookup of a published post by publish date and slug, plus
    /// its active comments.
    pub async fn detail(
        &self,
        year: i32,
        month: i32,
        day: i32,
        slug: &str,
    ) -> Result<(Post, Vec<Comment>)> {
        let post = self
            .repo
            .find_published_by_date_slug(year, month, day, slug)
            .await?
            .ok_or(Error::NotFound)?;

        let comments = self.repo.active_comments_for_post(post.id).await?;

        Ok((post, comments))
    }

    /// Attach a comment to the post addressed by the detail path. The
    /// post reference comes from the resolved post, never from the
    /// payload.
    pub async fn submit_comment(
        &self,
        year: i32,
        month: i32,
        day: i32,
        slug: &str,
        new_comment: CreateCommentDto,
    ) -> Result<Comment> {
        let post = self
            .repo
            .find_published_by_date_slug(year, month, day, slug)
            .await?
            .ok_or(Error::NotFound)?;

        self.repo
            .create_comment(post.id, &new_comment.name, &new_comment.email, &new_comment.body)
            .await
    }

    pub async fn published_by_id(&self, post_id: Uuid) -> Result<Post> {
        self.repo
            .find_published_by_id(post_id)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn all_published(&self) -> Result<Vec<Post>> {
        self.repo.all_published().await
    }

    pub async fn total_posts(&self) -> Result<i64> {
        self.repo.count_published().await
    }

    pub async fn latest_posts(&self, count: Option<i64>) -> Result<Vec<Post>> {
        let count = count.unwrap_or(DEFAULT_WIDGET_COUNT).max(0);
        self.repo.list_published(count, 0).await
    }

    pub async fn most_commented_posts(
        &self,
        count: Option<i64>,
    ) -> Result<Vec<PostWithCommentCount>> {
        let count = count.unwrap_or(DEFAULT_WIDGET_COUNT).max(0);
        self.repo.most_commented(count).await
    }
}
