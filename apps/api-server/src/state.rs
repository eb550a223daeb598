//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::InMemoryBlogPostRepository;
use blog_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabaseConnections, PostgresBlogPostRepository};

use crate::server::ServerError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    #[cfg(feature = "postgres")]
    db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Wrap an already-built repository. Nothing is closed on shutdown.
    pub fn with_repository(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Open the configured store. Without a database config the in-memory store is used.
    ///
    /// A configured database that cannot be reached is a startup failure.
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Result<Self, ServerError> {
        #[cfg(feature = "postgres")]
        if let Some(config) = db_config {
            let connections = DatabaseConnections::init(config)
                .await
                .map_err(|e| ServerError::Store(e.to_string()))?;
            if let Err(e) = connections.ensure_schema().await {
                let _ = connections.close().await;
                return Err(ServerError::Store(e.to_string()));
            }

            let posts = Arc::new(PostgresBlogPostRepository::new(connections.main.clone()));
            tracing::info!("Application state initialized (postgres store)");
            return Ok(Self {
                posts,
                db: Some(Arc::new(connections)),
            });
        }

        #[cfg(not(feature = "postgres"))]
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }

        tracing::warn!("Running without database (in-memory store). Data is lost on restart.");
        Ok(Self::with_repository(Arc::new(
            InMemoryBlogPostRepository::new(),
        )))
    }

    /// Release the store connection, if this state owns one.
    pub async fn close(&self) -> Result<(), ServerError> {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            db.close()
                .await
                .map_err(|e| ServerError::Store(e.to_string()))?;
        }

        Ok(())
    }
}
