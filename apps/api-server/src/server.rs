//! Server lifecycle - explicit `start` / `stop` around the HTTP listener and the store.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use blog_core::ports::BlogPostRepository;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Errors raised while starting or stopping the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Store unavailable: {0}")]
    Store(String),

    #[error("Failed to bind listener: {0}")]
    Bind(#[source] io::Error),

    #[error("Server terminated with error: {0}")]
    Runtime(#[source] io::Error),

    #[error("Server task failed: {0}")]
    Join(String),
}

/// A listening server together with the store it owns.
pub struct RunningServer {
    addr: SocketAddr,
    handle: Option<ServerHandle>,
    task: Option<JoinHandle<io::Result<()>>>,
    state: AppState,
}

/// Connect the configured store, bind `host:port` and start serving.
///
/// Store connection failures abort startup. Port 0 binds an ephemeral port,
/// see [`RunningServer::local_addr`].
pub async fn start(config: &AppConfig) -> Result<RunningServer, ServerError> {
    let state = AppState::connect(config.database.as_ref()).await?;

    match serve((config.host.as_str(), config.port), state.clone()) {
        Ok(server) => Ok(server),
        Err(e) => {
            let _ = state.close().await;
            Err(e)
        }
    }
}

/// Start serving on `addr` with an injected repository instead of a configured store.
pub async fn start_with_repository(
    addr: impl ToSocketAddrs,
    posts: Arc<dyn BlogPostRepository>,
) -> Result<RunningServer, ServerError> {
    serve(addr, AppState::with_repository(posts))
}

fn serve(addr: impl ToSocketAddrs, state: AppState) -> Result<RunningServer, ServerError> {
    let app_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(handlers::configure_routes)
    })
    .disable_signals()
    .bind(addr)
    .map_err(ServerError::Bind)?;

    let addr = server.addrs().first().copied().ok_or_else(|| {
        ServerError::Bind(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "no address was bound",
        ))
    })?;

    let server = server.run();
    let handle = server.handle();
    let task = actix_rt::spawn(server);

    tracing::info!(%addr, "Blog API listening");

    Ok(RunningServer {
        addr,
        handle: Some(handle),
        task: Some(task),
        state,
    })
}

impl RunningServer {
    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections, drain in-flight requests, then close the store.
    ///
    /// Calling `stop` on an already stopped server does nothing.
    pub async fn stop(&mut self) -> Result<(), ServerError> {
        let (Some(handle), Some(task)) = (self.handle.take(), self.task.take()) else {
            return Ok(());
        };

        tracing::info!(addr = %self.addr, "Stopping Blog API server");
        handle.stop(true).await;

        let served = match task.await {
            Ok(result) => result.map_err(ServerError::Runtime),
            Err(e) => Err(ServerError::Join(e.to_string())),
        };
        let closed = self.state.close().await;

        served?;
        closed?;
        tracing::info!("Blog API server stopped");
        Ok(())
    }
}
