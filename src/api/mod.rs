//! HTTP server for the Quotos site.
//!
//! Renders pages inside the document shell, serves embedded static assets
//! and exposes a health check.

mod handlers;
pub mod routes;
mod state;
mod static_assets;

#[cfg(test)]
mod routes_test;
#[cfg(test)]
mod static_assets_test;

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::site::{DocumentShell, PageMetadata};

pub use state::AppState;
pub use static_assets::shell_assets;

/// Environment variable overriding the bind address.
pub const HOST_ENV: &str = "QUOTOS_HOST";
/// Environment variable overriding the port.
pub const PORT_ENV: &str = "QUOTOS_PORT";

/// Server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind to {addr}")]
    #[diagnostic(
        code(quotos::api::bind),
        help("Is another process already listening on this port? Try --port or QUOTOS_PORT.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(quotos::api::serve))]
    Serve(#[source] std::io::Error),
}

/// Server configuration.
///
/// Precedence: builder (CLI flags) > environment > default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Metadata emitted into every document head
    pub metadata: PageMetadata,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            metadata: PageMetadata::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by `QUOTOS_HOST` / `QUOTOS_PORT` when set and valid.
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or(HOST_ENV, defaults.host),
            port: env_or(PORT_ENV, defaults.port),
            metadata: defaults.metadata,
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_metadata(mut self, metadata: PageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_or<T: std::str::FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotos=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the server with the given configuration until ctrl-c.
pub async fn run(config: Config) -> Result<(), ApiError> {
    let shell = DocumentShell::new(config.metadata.clone(), shell_assets());
    let app = routes::create_router(AppState::new(shell)).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("Quotos listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Serve)?;

    info!("Quotos server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
