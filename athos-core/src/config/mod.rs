use crate::error::ClientError;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Directory searched for `base.yaml` / `local.yaml`, relative to the
/// working directory.
pub const CONFIGURATION_DIRECTORY: &str = "configuration";

/// Load layered settings.
///
/// Sources, lowest precedence first: `configuration/base.*`,
/// `configuration/local.*` (both optional), then environment variables
/// named `{PREFIX}_{SECTION}__{KEY}`. A `.env` file is read beforehand.
pub fn load_configuration<T: DeserializeOwned>(env_prefix: &str) -> Result<T, ClientError> {
    dotenvy::dotenv().ok();

    let base_path = std::env::current_dir()
        .map_err(|e| ClientError::Config(config::ConfigError::Foreign(Box::new(e))))?;

    load_configuration_from(&base_path.join(CONFIGURATION_DIRECTORY), env_prefix)
}

/// Same as [`load_configuration`] but with an explicit configuration directory.
pub fn load_configuration_from<T: DeserializeOwned>(
    configuration_directory: &Path,
    env_prefix: &str,
) -> Result<T, ClientError> {
    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(false))
        .add_source(File::from(configuration_directory.join("local")).required(false))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}
