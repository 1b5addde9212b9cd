use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{posts::posts_handler, sitemap::sitemap_xml, widgets::widgets_handler},
    AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/posts", posts_handler())
        .nest("/widgets", widgets_handler())
        .layer(TraceLayer::new_for_http());

    Router::new()
        .nest("/api", api_route)
        .route("/sitemap.xml", get(sitemap_xml))
        .layer(CorsLayer::permissive())
        .layer(Extension(app_state))
}
