use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lockerdash")]
#[command(about = "Locker Dashboard Server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Path to the locker dataset CSV (overrides the configured path)
    #[arg(short, long)]
    data: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("LOCKERDASH_CONFIG", config);
    }
    if let Some(data) = args.data {
        std::env::set_var("LOCKERDASH_DATASET_PATH", data);
    }

    dashboard_bootstrap::run_standalone().await
}
