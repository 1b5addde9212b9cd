use std::sync::Arc;

use config::Config;
use repositories::PostgresRepo;
use routes::create_router;
use services::posts::PostsService;
use sqlx::{postgres::PgPoolOptions, PgPool};

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod logging;
mod mail;
mod markdown;
mod models;
mod pagination;
mod repositories;
mod routes;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Config,
    pub posts_service: PostsService,
}

#[tokio::main]
async fn main() {
    let config = Config::init();
    logging::init_logging();

    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            tracing::info!("Connection to the database is successful!");
            pool
        }
        Err(err) => {
            tracing::error!("Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::error!("Failed to run database migrations: {:?}", err);
        std::process::exit(1);
    }

    let repo = PostgresRepo::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        config: config.clone(),
        posts_service: PostsService::new(repo),
    };

    let app = create_router(Arc::new(app_state));

    let listener = tokio::net::TcpListener::bind(format!("[::]:{}", config.port))
        .await
        .unwrap();
    tracing::info!("Listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
