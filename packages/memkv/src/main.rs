use std::sync::Arc;

use clap::Parser;
use memkv_core_store::MemoryStore;
use memkv_http::{ServerConfig, DEFAULT_LISTEN, DEFAULT_MAX_UPLOAD_MIB};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// memkv - in-memory key-value store over HTTP
#[derive(Parser, Debug)]
#[command(name = "memkv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server listen address (`host:port`, or `:port` for all interfaces)
    #[arg(long, default_value = DEFAULT_LISTEN)]
    listen: String,

    /// Max upload size in MiB
    #[arg(long = "max-size", default_value_t = DEFAULT_MAX_UPLOAD_MIB)]
    max_size: u64,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        ServerConfig::new(self.listen, self.max_size)
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging();

    let config = args.into_config();
    if let Err(e) = memkv_http::serve(config, Arc::new(MemoryStore::new())).await {
        tracing::error!(error = %e, "server failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
