use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use listdrop_server::auth::{GoogleVerifier, IdentityVerifier};
use listdrop_server::store::FileStore;
use listdrop_server::{router, AppState};

/// File-backed sync store for the listdrop board.
#[derive(Parser, Debug)]
#[command(name = "listdrop-server", version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:4000")]
    bind: SocketAddr,

    /// Directory holding the per-user JSON files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// OAuth client id the bearer credentials must be issued for
    #[arg(long, required_unless_present = "insecure")]
    google_client_id: Option<String>,

    /// Skip credential verification and trust the client-claimed userId
    /// (local development only)
    #[arg(long)]
    insecure: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let verifier = match (&args.google_client_id, args.insecure) {
        (_, true) => {
            tracing::warn!("running insecure: client-claimed user ids are trusted as-is");
            None
        }
        (Some(client_id), false) => {
            Some(Arc::new(GoogleVerifier::new(client_id)) as Arc<dyn IdentityVerifier>)
        }
        // clap enforces one of the two
        (None, false) => unreachable!(),
    };

    let state = AppState {
        store: Arc::new(FileStore::new(&args.data_dir)?),
        verifier,
    };

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(addr = %args.bind, data_dir = %args.data_dir.display(), "sync server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
