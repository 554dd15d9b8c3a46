use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use traffic_board::config::{self, Config};
use traffic_board::server;

/// Travel-time board for a named set of itineraries.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Itinerary file for the server.
    #[arg(short = 'c', long = "config", default_value = "default.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load(&cli.config)?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
