mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bankdash")]
#[command(about = "Bank details demo dashboard behind a cookie-gated login", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web app
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Coerce key=value fields and overwrite the stored record
    Save {
        /// Local store file (defaults to BANKDASH_STORE or the user data dir)
        #[arg(short, long)]
        store: Option<PathBuf>,
        /// Fields as name=value, e.g. bankName="Demo Bank"
        fields: Vec<String>,
    },
    /// Print the stored record
    Show {
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    /// Print the dashboard datasets derived from the stored record
    Charts {
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    /// Remove the stored record
    Clear {
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
}

/// Resolve the local store file: explicit flag, then `BANKDASH_STORE`, then
/// the per-user data directory.
pub(crate) fn get_store_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os("BANKDASH_STORE").map(PathBuf::from))
        .unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("bankdash")
                .join("local_storage.json")
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Save { store, fields } => commands::record::run_save(get_store_path(store), &fields),
        Commands::Show { store } => commands::record::run_show(get_store_path(store)),
        Commands::Charts { store } => commands::record::run_charts(get_store_path(store)),
        Commands::Clear { store } => commands::record::run_clear(get_store_path(store)),
    }
}
