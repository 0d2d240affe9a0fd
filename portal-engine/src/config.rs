//! Engine configuration
//!
//! # Environment variables
//!
//! All configuration can be overridden through environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | PORTAL_FIXTURE_DIR | (embedded fixtures) | Directory of fixture JSON overrides |
//! | ENVIRONMENT | development | Runtime environment label |

use std::path::PathBuf;

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Optional directory holding fixture JSON files that override the
    /// embedded ones. Files that are absent there fall back to the bundle.
    pub fixture_dir: Option<PathBuf>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration, reading `.env` first if present
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Build configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            fixture_dir: std::env::var("PORTAL_FIXTURE_DIR").ok().map(PathBuf::from),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_fixture_dir() {
        let config = Config::default();
        assert!(config.fixture_dir.is_none());
    }
}
