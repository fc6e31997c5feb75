mod aggregator;
mod cli;
mod client;
mod config;
mod error;
mod layout;
mod model;
mod output;
mod scheduler;
mod surface;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting pipeboard");
    cli.execute().await?;

    Ok(())
}
