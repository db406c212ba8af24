mod config;

use anyhow::{Context, Result};
use apiconn_api::{ApiConnector, Segment, StoredConnector};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::Config;

/// Fetch a JSON resource by path segment and print it
#[derive(Debug, Parser)]
#[command(name = "apiconn", version, about)]
struct Args {
    /// Server address (overrides config and APICONN_ADDRESS)
    #[arg(long)]
    address: Option<String>,

    /// Server port (overrides config and APICONN_PORT)
    #[arg(long)]
    port: Option<String>,

    /// Base path (overrides config and APICONN_PATH)
    #[arg(long)]
    path: Option<String>,

    /// Fetch through the stored-response connector
    #[arg(long)]
    stored: bool,

    /// Persist the resolved address, port and path to the config file
    #[arg(long)]
    save: bool,

    /// Path segments appended to the base URL
    segments: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let config = Config::load()
        .with_env(|key| std::env::var(key).ok())
        .with_overrides(args.address, args.port, args.path);

    let target = config.clone().into_target()?;

    if args.save {
        config.save().context("failed to save config")?;
    }

    let connector = ApiConnector::from_target(target);
    let segments: Vec<Segment<'_>> = args.segments.iter().map(|s| s as Segment<'_>).collect();
    let url = connector.request_url(&segments);

    let value = if args.stored {
        let mut stored = StoredConnector::from_connector(connector);
        stored
            .make_request(&segments)
            .await
            .with_context(|| format!("GET {url} failed"))?;
        stored.get_data().clone()
    } else {
        connector
            .get_data(&segments)
            .await
            .with_context(|| format!("GET {url} failed"))?
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
