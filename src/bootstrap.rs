//! Process start-up: logging, settings, connection pool and the validated
//! classification configuration.

use config::ConfigError;
use diesel::r2d2::PoolError;
use thiserror::Error;

use crate::db::establish_connection_pool;
use crate::domain::classification::{CategoryRuleTable, Classifier};
use crate::domain::errors::ConfigurationError;
use crate::domain::visibility::VisibilityRegistry;
use crate::repository::{AssetTypeReader, DieselRepository, RepositoryError};
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to load settings: {0}")]
    Settings(#[from] ConfigError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("failed to open database: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to read asset types: {0}")]
    Repository(#[from] RepositoryError),
}

/// Everything the asset services need, built once per process.
#[derive(Clone)]
pub struct MediaContext {
    pub repository: DieselRepository,
    pub classifier: Classifier,
    pub visibilities: VisibilityRegistry,
}

/// Initialises `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}

/// Loads `.env`, logging and the settings at `config_path`, then builds the context.
pub fn bootstrap(config_path: &str) -> Result<MediaContext, BootstrapError> {
    dotenvy::dotenv().ok();
    init_logging();

    let settings = Settings::load(config_path)?;
    build_context(&settings)
}

/// Builds the context from loaded settings, failing fast on any inconsistency
/// between the rule table and the stored asset types.
pub fn build_context(settings: &Settings) -> Result<MediaContext, BootstrapError> {
    let table = settings.rule_table()?;
    let visibilities = settings.visibility_registry()?;

    let pool = establish_connection_pool(&settings.database_url)?;
    let repository = DieselRepository::new(pool);
    verify_category_rows(&table, &repository)?;

    log::info!(
        "Loaded {} asset categories (fallback `{}`) and {} visibilities",
        table.rules().len(),
        table.fallback(),
        visibilities.labels().count()
    );

    Ok(MediaContext {
        repository,
        classifier: Classifier::new(table),
        visibilities,
    })
}

/// Every rule key must have an asset type row.
pub fn verify_category_rows<R>(table: &CategoryRuleTable, repo: &R) -> Result<(), BootstrapError>
where
    R: AssetTypeReader,
{
    let asset_types = repo.list_asset_types()?;
    for key in table.keys() {
        if !asset_types.iter().any(|asset_type| &asset_type.key == key) {
            log::error!("Category `{key}` has no asset type record");
            return Err(ConfigurationError::UnknownCategoryKey(key.to_string()).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::{TestRepository, standard_asset_types};

    #[test]
    fn standard_table_matches_seeded_asset_types() {
        let repo = TestRepository::default().with_asset_types(standard_asset_types());
        let table = CategoryRuleTable::standard().unwrap();

        assert!(verify_category_rows(&table, &repo).is_ok());
    }

    #[test]
    fn missing_asset_type_row_fails_startup() {
        let mut asset_types = standard_asset_types();
        asset_types.retain(|t| t.key.as_str() != "flash");
        let repo = TestRepository::default().with_asset_types(asset_types);
        let table = CategoryRuleTable::standard().unwrap();

        let err = verify_category_rows(&table, &repo).unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::Configuration(ConfigurationError::UnknownCategoryKey(ref key)) if key == "flash"
        ));
    }
}
