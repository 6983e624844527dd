//! sifter-client - CHORD FRB sifter demonstration client
//!
//! Sends one configuration check and one event batch to a sifter and prints
//! what came back. The connection is plaintext and unauthenticated.

mod cli;
mod demo;

use anyhow::Result;
use clap::Parser;
use sifter_domain::SifterClient;
use sifter_grpc::{GrpcSifterConfig, GrpcSifterGateway};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("SIFTER_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let config = cli.apply(GrpcSifterConfig::from_env()?);
    info!(target_addr = %config.target, "Starting sifter client");

    let gateway = GrpcSifterGateway::new(&config)?;
    let client = SifterClient::new(gateway);

    let report = demo::run(&client).await;

    println!("Sifter config check: {}", report.config.is_accepted());
    println!("Sifter event batch reply: {:?}", report.batch.message());
    if let Some((code, message)) = report
        .config
        .transport_failure()
        .or_else(|| report.batch.transport_failure())
    {
        println!("Sifter call failed: {} ({}): {}", code.as_i32(), code, message);
    }

    Ok(())
}
