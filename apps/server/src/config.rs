use config::{Config, Environment, File};
use homeval_domain::config::ApiConfig;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration loading failure.
#[derive(Debug, thiserror::Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(#[from] config::ConfigError);

/// Loads the layered service configuration.
///
/// 1. **Base file**: `server.toml` in the working directory (or the given
///    path). The file is optional; every setting has a default.
/// 2. **Environment overrides**: variables prefixed with `HOMEVAL__`,
///    nested keys separated by double underscores
///    (e.g. `HOMEVAL__SERVER__PORT` maps to `server.port`).
///
/// # Errors
/// Returns [`ConfigError`] if a present file or an environment variable
/// cannot be deserialized into [`ApiConfig`].
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<ApiConfig, ConfigError> {
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("HOMEVAL")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()?
        .try_deserialize::<ApiConfig>()?;

    Ok(config)
}
