use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wpmirror_server::config::MirrorConfig;
use wpmirror_server::database::ContentDatabase;
use wpmirror_server::database::sqlite::SqliteDatabase;
use wpmirror_server::{AppState, build_router, integrity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wpmirror_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // load centralized config
    let config = MirrorConfig::from_env()?;
    let shared_config = Arc::new(config.clone());

    // the pool connects on first use and lives as long as the process
    let db: Arc<dyn ContentDatabase> = Arc::new(SqliteDatabase::connect_lazy(
        &config.database_url,
        config.max_connections,
    )?);

    // an unreachable database is not fatal, the endpoints answer 500 until it comes back
    match db.ping().await {
        Ok(()) => tracing::info!("Database reachable at {}", config.database_url),
        Err(e) => tracing::warn!(
            error = %e,
            "Database at {} is not reachable yet",
            config.database_url
        ),
    }

    if config.check_integrity {
        integrity::check_slugs(db.as_ref()).await.log();
    }

    let app = build_router(AppState {
        db,
        config: shared_config,
    });

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server listening on http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
