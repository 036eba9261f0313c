//! Process entry point: configuration, pool, migration, router, listener.

use axum::Router;
use bookstore_api::{apply_migrations, book_routes, common_routes, AppState, BookStore, DbConfig};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bookstore_api=info,tower_http=info")),
        )
        .init();

    let config = DbConfig::from_env()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(config.connect_options())
        .await?;
    apply_migrations(&pool).await?;

    let state = AppState { store: BookStore::new(pool) };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", book_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
