//! API Gateway - HTTP REST API for user records.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::ServiceConfig;
use gateway_lib::config::GatewayConfig;
use user_service_lib::config::ListMode;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "In-memory user records API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides GATEWAY_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides GATEWAY_PORT
        #[arg(long)]
        port: Option<u16>,
        /// Overrides USER_LIST_MODE (literal | sliced)
        #[arg(long)]
        list_mode: Option<ListMode>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing first: config loading may warn
    let default_filter =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| ServiceConfig::default().log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = GatewayConfig::from_env();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            list_mode,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(list_mode) = list_mode {
                config.users.list_mode = list_mode;
            }
            gateway_lib::run_server(config).await?;
        }
    }

    Ok(())
}
