use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use moodtunes::catalog::{DatasetLoader, errors::LookupError};
use moodtunes::errors::Result;

use crate::server;

#[derive(Parser)]
#[command(name = "moodtunes")]
#[command(version, about = "Serve mood-tagged music video suggestions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST")]
        host: Option<IpAddr>,
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
        /// Music data JSON file
        #[arg(long, env = "MUSIC_DATA_PATH")]
        data: Option<PathBuf>,
        /// Directory of static files served next to the API
        #[arg(long, env = "PUBLIC_DIR")]
        public_dir: Option<PathBuf>,
    },
    /// Print the suggestions for a mood as JSON
    Lookup {
        mood: String,
        /// Music data JSON file
        #[arg(long, env = "MUSIC_DATA_PATH")]
        data: Option<PathBuf>,
    },
    /// Validate the music data file and report why it would be rejected
    Check {
        /// Music data JSON file
        #[arg(long, env = "MUSIC_DATA_PATH")]
        data: Option<PathBuf>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            data,
            public_dir,
        } => {
            let config = server::ConfigBuilder::new()
                .host(host)
                .port(port)
                .data_path(data)
                .public_dir(public_dir)
                .build();
            server::Server::new(config).serve().await
        }
        Commands::Lookup { mood, data } => {
            println!("{}", lookup(&mood, data).await?);
            Ok(())
        }
        Commands::Check { data } => {
            check(data).await?;
            Ok(())
        }
    }
}

fn loader(data: Option<PathBuf>) -> DatasetLoader {
    data.map_or_else(DatasetLoader::default, DatasetLoader::new)
}

// Pretty-printed JSON of the suggestions for one mood
async fn lookup(mood: &str, data: Option<PathBuf>) -> Result<String> {
    let dataset = loader(data).load().await;
    let videos = dataset.lookup(mood).inspect_err(|e| {
        if let LookupError::MoodNotFound { available_moods } = e {
            info!("Available moods: {}", available_moods.join(", "));
        }
    })?;
    Ok(serde_json::to_string_pretty(&videos)?)
}

// Strict load; returns the number of keys in a valid file
async fn check(data: Option<PathBuf>) -> Result<usize> {
    let loader = loader(data);
    let dataset = loader.try_load().await?;
    for mood in dataset.moods() {
        match dataset.videos(mood) {
            Some(videos) => info!("{mood}: {} videos", videos.len()),
            None => info!("{mood}: not a video list"),
        }
    }
    info!("{:?} is valid", loader.path());
    Ok(dataset.len())
}
