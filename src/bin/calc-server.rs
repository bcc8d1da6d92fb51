//! calc-server - HTTP front end for the formula library
//!
//! ```bash
//! RUST_LOG=info calc-server --bind 127.0.0.1:8000 --config rates.toml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rusty_calculator::config::CalculatorConfig;
use rusty_calculator::server::{self, AppState};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calc-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the calculator API over HTTP", long_about = None)]
struct Args {
    /// Address to listen on (overrides the config file)
    #[arg(short, long)]
    bind: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = CalculatorConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    let rates = config.rate_table().context("Invalid rate table")?;
    log::info!(
        "Loaded {} currencies (reference {})",
        rates.len(),
        rates.reference()
    );

    let bind = args.bind.unwrap_or(config.server.bind);
    server::run(&bind, AppState::new(rates))
        .await
        .with_context(|| format!("Server on {} failed", bind))?;

    Ok(())
}
