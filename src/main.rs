use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dealer_ui::{client::HttpInventoryClient, config::Config, web::WebServer};

#[derive(Parser)]
#[command(name = "dealer-ui")]
#[command(version)]
#[command(about = "Web front end for managing dealership vehicle inventory")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Inventory API base URL (overrides config file)
    #[arg(short = 'a', long, value_name = "URL")]
    api_url: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("dealer_ui={},tower_http=trace", cli.log_level)
    } else {
        format!("dealer_ui={},tower_http={}", cli.log_level, cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Dealer UI v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }

    let client = HttpInventoryClient::new(&config.api)?;
    info!("Using inventory API at {}", client.base_url());

    let server = WebServer::new(config, Arc::new(client))?;
    info!("Web server starting on http://{}:{}", server.host(), server.port());
    server.serve().await?;

    Ok(())
}
