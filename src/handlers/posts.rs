use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    mail::mails::send_share_email,
    models::{
        comments::CreateCommentDto,
        query::ListPostsQuery,
        response::{PostDetailResponse, PostListResponse, ShareResponse},
        share::SharePostDto,
    },
    AppState, Result,
};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/", get(list_posts))
        // Comment submission shares the detail path, discriminated by method.
        .route(
            "/{year}/{month}/{day}/{slug}",
            get(post_detail).post(submit_comment),
        )
        .route("/share/{id}", post(share_post))
}

async fn list_posts(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<ListPostsQuery>,
) -> Result<impl IntoResponse> {
    let page = app_state
        .posts_service
        .list_page(params.page.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(PostListResponse {
            page: params.page,
            number: page.number,
            num_pages: page.num_pages,
            posts: page.items,
        }),
    ))
}

async fn post_detail(
    Extension(app_state): Extension<Arc<AppState>>,
    Path((year, month, day, slug)): Path<(i32, i32, i32, String)>,
) -> Result<impl IntoResponse> {
    let (post, comments) = app_state
        .posts_service
        .detail(year, month, day, &slug)
        .await?;

    Ok((StatusCode::OK, Json(PostDetailResponse::new(post, comments))))
}

async fn submit_comment(
    Extension(app_state): Extension<Arc<AppState>>,
    Path((year, month, day, slug)): Path<(i32, i32, i32, String)>,
    Json(new_comment): Json<CreateCommentDto>,
) -> Result<impl IntoResponse> {
    new_comment.validate()?;

    let comment = app_state
        .posts_service
        .submit_comment(year, month, day, &slug, new_comment)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

async fn share_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
    Json(share): Json<SharePostDto>,
) -> Result<impl IntoResponse> {
    share.validate()?;

    let post = app_state.posts_service.published_by_id(post_id).await?;
    let post_url = post.absolute_url(&app_state.config.base_url);

    send_share_email(
        &share.to,
        &share.name,
        &share.email,
        &post.title,
        &post_url,
        share.comments.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(ShareResponse {
            status: "success",
            sent: true,
        }),
    ))
}
