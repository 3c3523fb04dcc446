//! Database connection and HTTP server lifecycle

use crate::config::{AppConfig, DatabaseConfig};
use anyhow::{Context, Result};
use axum::Router;
use projects_service::ProjectsServiceModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::trace::TraceLayer;

/// Open the connection pool shared by all requests
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to database {}", redact_url(&config.url)))?;

    tracing::info!(url = %redact_url(&config.url), "Connected to database");
    Ok(db)
}

/// Connect, migrate and assemble the application router
pub async fn build_app(config: &AppConfig) -> Result<Router> {
    let db = connect(&config.database).await?;
    projects_service::module::migrate(&db)
        .await
        .context("failed to run database migrations")?;

    let module = ProjectsServiceModule::init(config.projects.clone(), db)?;
    Ok(module.router().layer(TraceLayer::new_for_http()))
}

/// Serve until Ctrl-C or SIGTERM
pub async fn run(config: AppConfig) -> Result<()> {
    let app = build_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "Projects server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Projects server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Hide credentials in a connection URL before it is logged
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    match rest.split_once('@') {
        Some((userinfo, host)) => {
            let user = userinfo.split(':').next().unwrap_or_default();
            format!("{}://{}:***@{}", scheme, user, host)
        }
        None => url.to_string(),
    }
}
