mod command;
mod config;
mod daemon;
mod data;
mod error;
mod service;
mod startup;
mod storage;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = command::Cli::parse();

    if let Err(err) = command::run(cli).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
