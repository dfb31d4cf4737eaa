use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use log::{info, warn};
use moodtunes::api::{AppState, build_router};
use moodtunes::catalog::{DatasetLoader, loader::DEFAULT_DATA_PATH};
use moodtunes::errors::Result;
use tokio::signal;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "public";

// Configuration for the Server struct
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_path: PathBuf,
    pub public_dir: PathBuf,
}

#[derive(Default)]
pub struct ConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    data_path: Option<PathBuf>,
    public_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: Option<IpAddr>) -> Self {
        self.host = host;
        self
    }

    pub fn port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    pub fn data_path(mut self, data_path: Option<PathBuf>) -> Self {
        self.data_path = data_path;
        self
    }

    pub fn public_dir(mut self, public_dir: Option<PathBuf>) -> Self {
        self.public_dir = public_dir;
        self
    }

    pub fn build(self) -> Config {
        Config {
            host: self.host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: self.port.unwrap_or(DEFAULT_PORT),
            data_path: self
                .data_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            public_dir: self
                .public_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
        }
    }
}

// Loads the catalog once, then serves it until a shutdown signal arrives
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Server { config }
    }

    pub async fn serve(&self) -> Result<()> {
        let dataset = DatasetLoader::new(&self.config.data_path).load().await;
        let app = build_router(AppState::new(dataset), Some(self.config.public_dir.as_path()));

        let addr = SocketAddr::new(self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(
            "MoodTunes server running on http://localhost:{}",
            listener.local_addr()?.port()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server closed");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Ctrl+C received, shutting down gracefully"),
        () = terminate => info!("SIGTERM received, shutting down gracefully"),
    }
}
