//! postboard server binary.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:6969/api/posts
//!   curl -X POST http://localhost:6969/api/posts \
//!        -H 'content-type: application/json' \
//!        -d '{"author":"Nils","content":"Hei"}'
//!   curl -X DELETE http://localhost:6969/api/posts/1

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use postboard::{app, Config, PostStore, Server};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let store = if config.seed {
        PostStore::seeded(config.id_strategy)
    } else {
        PostStore::new(config.id_strategy)
    };
    info!(
        id_strategy = %store.id_strategy(),
        posts = store.len(),
        "post store ready"
    );

    match Server::bind(config.addr).serve(app(Arc::new(store))).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server error: {e}");
            ExitCode::FAILURE
        }
    }
}
