use accent_roaster::relay::{create_router, AppState};
use accent_roaster::Config;
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "accent-roaster", about = "Accent roast relay service")]
struct Args {
    /// Config file basename, without extension
    #[arg(long, default_value = "config/accent-roaster")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v0.1.0", cfg.service.name);
    info!(
        "Upstream: {} ({} / {})",
        cfg.upstream.base_url, cfg.upstream.transcription_model, cfg.upstream.generation_model
    );

    let state = AppState::from_config(&cfg.upstream);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
