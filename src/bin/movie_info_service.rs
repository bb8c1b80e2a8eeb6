//! Movie info service entry point.
//!
//! Serves the movie info store with its replay-then-live feed, on port
//! 8080 unless configured otherwise.

use cinefeed::api::rest::movie_info::{self, MovieInfoState};
use cinefeed::config::Settings;
use cinefeed::domain::entities::MovieInfo;
use cinefeed::infrastructure::feed::ReplayBroadcaster;
use cinefeed::infrastructure::persistence::in_memory::InMemoryMovieInfoRepository;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let settings = Settings::load(8080)?;

    let state = MovieInfoState::new(Arc::new(InMemoryMovieInfoRepository::new()));
    let feed = state.feed.clone();
    let app = movie_info::router(state);

    let addr = settings.server.bind_addr();
    tracing::info!(%addr, "movie info service listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(feed))
        .await?;

    Ok(())
}

/// Waits for ctrl-c, then closes the feed so open stream responses end.
async fn shutdown_signal(feed: ReplayBroadcaster<MovieInfo>) {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down, closing live feed");
    feed.close();
}
