use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod server;

#[derive(Parser, Debug, Clone)]
#[command(name = "tierwatch")]
#[command(author, version, about = "Watches a Twitch account's broadcaster tier and announces partners/affiliates")]
pub struct Args {
    /// Dotenv file to load before reading configuration. Variables already
    /// set in the environment win.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Authenticate, run a single poll, then exit
    #[arg(long, default_value = "false")]
    once: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tierwatch=info"));
    let sub = fmt().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(sub) {
        eprintln!("Failed to set global subscriber: {e}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Before tracing so RUST_LOG from the file is honored.
    let env_loaded = dotenv::from_filename(&args.env_file);
    init_tracing();

    match env_loaded {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No env file at {} ({}); using process environment", args.env_file.display(), e),
    }
    info!("tierwatch {} starting. once={}", env!("CARGO_PKG_VERSION"), args.once);

    match server::run_server(args).await {
        Ok(()) => {
            info!("Main finished. Goodbye!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
