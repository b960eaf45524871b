//! sampah-ui - Prioritas Penanganan Sampah Kota Tasikmalaya
//!
//! Web front end over the pre-trained waste-volume regression: landing page,
//! prediction form, and the JSON API behind it.

use anyhow::Result;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use sampah_common::config::resolve_models_dir;
use sampah_ui::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "sampah-ui", version, about = "Waste priority prediction web UI")]
struct Args {
    /// Directory holding model_lr_sampah.json and encoder_kecamatan.json
    #[arg(long)]
    models_dir: Option<String>,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8501)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Prioritas Sampah UI (sampah-ui) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let models_dir = resolve_models_dir(args.models_dir.as_deref());
    info!("Models directory: {}", models_dir.display());

    let (model, encoder) = match sampah_common::load_artifacts(&models_dir) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            error!("Failed to load model artifacts: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(model, encoder);
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("sampah-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
