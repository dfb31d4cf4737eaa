//! Command line entry point for the MoodTunes server.

mod cli;
mod server;

use log::error;

#[tokio::main]
async fn main() {
    // Variables from .env must be visible before the CLI reads its env fallbacks
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = cli::run().await {
        error!("{e}");
        std::process::exit(1);
    }
}
