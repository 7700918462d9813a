//! Serve command - Starts the HTTP server.
//!
//! Startup order mirrors what the deployment expects: upload directory,
//! database, optional one-time table creation, then the listener.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!(environment = %config.environment, "Starting server...");

    if config.debug {
        tracing::warn!("Debug mode is enabled; never use this in production");
    }

    ensure_upload_dir(Path::new(&config.upload_dir)).await?;
    tracing::info!(dir = %config.upload_dir, "Upload directory ready");

    let db = Arc::new(Database::connect(&config).await?);
    tracing::info!("Database configured successfully");

    if config.create_tables {
        db.create_tables().await?;
        tracing::info!("Database tables created/updated");
        tracing::warn!(
            "Remove CREATE_TABLES=true from the environment after initial setup"
        );
    }

    let app_state = AppState::new(db, config);
    let app = create_router(app_state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Create the upload directory; succeeds if it already exists.
async fn ensure_upload_dir(path: &Path) -> AppResult<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_dir_creation_is_idempotent() {
        let dir = std::env::temp_dir().join(format!("appstack-uploads-{}", std::process::id()));

        ensure_upload_dir(&dir).await.unwrap();
        assert!(dir.is_dir());

        // Second call must not fail on the existing directory
        ensure_upload_dir(&dir).await.unwrap();

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn nested_upload_dir_is_created() {
        let dir = std::env::temp_dir()
            .join(format!("appstack-nested-{}", std::process::id()))
            .join("a")
            .join("b");

        ensure_upload_dir(&dir).await.unwrap();
        assert!(dir.is_dir());

        let root = std::env::temp_dir().join(format!("appstack-nested-{}", std::process::id()));
        std::fs::remove_dir_all(&root).unwrap();
    }
}
