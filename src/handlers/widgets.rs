use std::sync::Arc;

use axum::{
    extract::Query, http::StatusCode, response::IntoResponse, routing::get, Extension, Json,
    Router,
};

use crate::{
    models::{
        query::WidgetQuery,
        response::{LatestPostsResponse, MostCommentedPostsResponse, TotalPostsResponse},
    },
    AppState, Result,
};

/// Sidebar widgets: the listing counters and rankings consumed by the
/// presentation layer.
pub fn widgets_handler() -> Router {
    Router::new()
        .route("/total-posts", get(total_posts))
        .route("/latest-posts", get(latest_posts))
        .route("/most-commented-posts", get(most_commented_posts))
}

async fn total_posts(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let total = app_state.posts_service.total_posts().await?;

    Ok((StatusCode::OK, Json(TotalPostsResponse { total_posts: total })))
}

async fn latest_posts(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<WidgetQuery>,
) -> Result<impl IntoResponse> {
    let posts = app_state.posts_service.latest_posts(params.count).await?;

    Ok((StatusCode::OK, Json(LatestPostsResponse { latest_posts: posts })))
}

async fn most_commented_posts(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<WidgetQuery>,
) -> Result<impl IntoResponse> {
    let posts = app_state
        .posts_service
        .most_commented_posts(params.count)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MostCommentedPostsResponse {
            most_commented_posts: posts,
        }),
    ))
}
