//! # Configuration
//!
//! Runtime settings for the three service binaries.
//!
//! Settings are resolved with the usual precedence, lowest first:
//!
//! 1. Built-in defaults (each binary passes its conventional port)
//! 2. `cinefeed.toml` in the working directory, if present
//! 3. `CINEFEED__*` environment variables
//!
//! Nested keys use `__` as the separator, so `CINEFEED__SERVER__PORT=9090`
//! overrides `server.port` and `CINEFEED__DOWNSTREAM__REVIEWS_URL=...`
//! overrides `downstream.reviews_url`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for one service process.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Downstream store locations, used by the movies service.
    pub downstream: DownstreamSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Locations of the downstream stores.
#[derive(Debug, Clone, Deserialize)]
pub struct DownstreamSettings {
    /// Movie info collection URL.
    pub movie_infos_url: String,
    /// Review collection URL.
    pub reviews_url: String,
}

impl Settings {
    /// Loads settings, layering file and environment over the defaults.
    ///
    /// `default_port` is the conventional port of the calling binary, kept
    /// as a parameter so all three services share one loader.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or a value does
    /// not fit its field.
    pub fn load(default_port: u16) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(default_port))?
            .set_default(
                "downstream.movie_infos_url",
                "http://localhost:8080/v1/movie-infos",
            )?
            .set_default("downstream.reviews_url", "http://localhost:8081/v1/reviews")?
            .add_source(File::with_name("cinefeed").required(false))
            .add_source(
                Environment::with_prefix("CINEFEED")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

impl ServerSettings {
    /// Returns the bind address as `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
