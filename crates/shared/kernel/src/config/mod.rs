use config::{Config, Environment, File};
use hdesign_domain::config::DesignConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "HDESIGN";

/// File stem used when no path is given (`design.toml`, `design.json`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "design";

/// Custom error type for config loading.
#[hdesign_derive::hdesign_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `design.toml`). If no path is provided, it defaults to `"design"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `HDESIGN__`.
///    Nested structures are accessed using double underscores (e.g., `HDESIGN__HTTP__PATH` maps to `http.path`).
///    Values are parsed, so `HDESIGN__HTTP__DEFAULT_RESPONSES=false` overrides a boolean field.
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust,ignore
/// use hdesign_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct GeneratorConfig {
///     output: String,
/// }
///
/// let cfg: GeneratorConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the [`DesignConfig`] used by an evaluation pass.
///
/// # Errors
/// See [`load_config`].
pub fn load_design_config(path: Option<impl AsRef<Path>>) -> Result<DesignConfig, ConfigError> {
    load_config(path)
}
