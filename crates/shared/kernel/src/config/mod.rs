use bolt_domain::constants::ENV_PREFIX;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the optional config file looked up in the working directory
/// (`bolt.toml`, `bolt.yaml`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "bolt";

#[bolt_derive::bolt_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with `BOLT__` environment overrides on top.
///
/// * With `Some(path)` the file must exist.
/// * With `None`, `bolt.*` in the working directory is used when present; otherwise the
///   type's serde defaults apply.
///
/// Nested keys use double underscores: `BOLT__API__BASE_URL` maps to `api.base_url`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be
/// parsed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use bolt_kernel::config::load_config;
/// use bolt_kernel::domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(!cfg.api.base_url.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_environment(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true)
}

fn load_with_environment<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %file.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
