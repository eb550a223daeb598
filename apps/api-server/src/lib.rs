//! # Blog API Server
//!
//! Actix-web handler layer over the blog-post repository, plus the
//! configuration, telemetry and `start`/`stop` lifecycle used by the binary
//! and by test harnesses.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod telemetry;

pub use server::{RunningServer, ServerError, start, start_with_repository};
pub use state::AppState;
