//! Movies aggregation service entry point.
//!
//! Joins the movie info and review stores behind a single read surface,
//! on port 8082 unless configured otherwise.

use cinefeed::api::rest::movies::{self, MoviesState};
use cinefeed::application::services::MovieAggregationService;
use cinefeed::config::Settings;
use cinefeed::infrastructure::downstream::{HttpClient, MovieInfoClient, ReviewsClient};
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

    let settings = Settings::load(8082)?;

    let http = HttpClient::new()?;
    let aggregation = MovieAggregationService::new(
        MovieInfoClient::new(http.clone(), settings.downstream.movie_infos_url.clone()),
        ReviewsClient::new(http, settings.downstream.reviews_url.clone()),
    );
    let app = movies::router(MoviesState::new(aggregation));

    let addr = settings.server.bind_addr();
    tracing::info!(
        %addr,
        movie_infos_url = %settings.downstream.movie_infos_url,
        reviews_url = %settings.downstream.reviews_url,
        "movies service listening"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
