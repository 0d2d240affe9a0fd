//! Fixture loading
//!
//! The catalog, act and receipt data ship as JSON bundled into the crate.
//! A configured fixture directory overrides individual files; anything
//! missing there falls back to the bundle. Loaders degrade to empty
//! services with an error log rather than failing - the screens stay up
//! with no data.

use include_dir::{include_dir, Dir};
use shared::error::AppResult;
use shared::AppError;

use crate::catalog::CatalogService;
use crate::config::Config;
use crate::documents::{ActRegistry, ReceiptRegistry};

static FIXTURES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/fixtures");

/// Service catalog fixture file
pub const CATALOG_FIXTURE: &str = "katalogas.json";
/// Generated acts fixture file
pub const ACTS_FIXTURE: &str = "generated_acts.json";
/// Receipts fixture file
pub const RECEIPTS_FIXTURE: &str = "receipts.json";

/// Read a fixture: configured directory first, embedded bundle second
pub fn read_fixture(config: &Config, name: &str) -> AppResult<String> {
    if let Some(dir) = &config.fixture_dir {
        let path = dir.join(name);
        if path.exists() {
            return std::fs::read_to_string(&path).map_err(|e| {
                AppError::fixture_io(format!("{}: {}", path.display(), e))
            });
        }
    }

    FIXTURES
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .map(str::to_string)
        .ok_or_else(|| AppError::fixture_io(format!("{} is not bundled", name)))
}

/// Load the service catalog, degrading to an empty catalog on failure
pub fn load_catalog(config: &Config) -> CatalogService {
    match read_fixture(config, CATALOG_FIXTURE).and_then(|data| CatalogService::from_json(&data)) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("failed to load catalog fixture: {}", e);
            CatalogService::default()
        }
    }
}

/// Load the act registry, degrading to an empty registry on failure
pub fn load_acts(config: &Config) -> ActRegistry {
    match read_fixture(config, ACTS_FIXTURE).and_then(|data| ActRegistry::from_json(&data)) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("failed to load acts fixture: {}", e);
            ActRegistry::default()
        }
    }
}

/// Load the receipt registry, degrading to an empty registry on failure
pub fn load_receipts(config: &Config) -> ReceiptRegistry {
    match read_fixture(config, RECEIPTS_FIXTURE).and_then(|data| ReceiptRegistry::from_json(&data))
    {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("failed to load receipts fixture: {}", e);
            ReceiptRegistry::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_fixtures_present() {
        let config = Config::default();
        for name in [CATALOG_FIXTURE, ACTS_FIXTURE, RECEIPTS_FIXTURE] {
            assert!(read_fixture(&config, name).is_ok(), "missing {}", name);
        }
    }

    #[test]
    fn test_unknown_fixture_is_io_error() {
        let config = Config::default();
        let err = read_fixture(&config, "nothing.json").unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::FixtureIo);
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = load_catalog(&Config::default());
        assert!(!catalog.is_empty());
        assert!(catalog.find_by_code("A112").is_some());
    }
}
