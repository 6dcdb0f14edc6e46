//! Runtime configuration.
//!
//! Everything comes from `WEALTH_COACH__<SECTION>__<KEY>` environment
//! variables (a `.env` file is honoured in development). Each section
//! validates itself; [`AppConfig::validate`] adds the cross-section rules.
//!
//! ```no_run
//! use wealth_coach::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! let settings = config.suggestion.to_settings()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod database;
mod error;
mod server;
mod suggestion;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use suggestion::SuggestionConfig;

use serde::Deserialize;

/// All configuration sections. Every field has a default, so an empty
/// environment gives a development setup on in-memory stores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub suggestion: SuggestionConfig,
}

impl AppConfig {
    /// Read the environment into typed sections.
    ///
    /// `WEALTH_COACH__SUGGESTION__PASSING_SCORE=75` sets
    /// `suggestion.passing_score`. Values are parsed, not validated.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WEALTH_COACH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Production must name a PostgreSQL database.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.suggestion.validate()?;
        if self.is_production() && !self.database.is_configured() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
