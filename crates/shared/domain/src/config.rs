use crate::constants::DEFAULT_MIME;
use crate::schemes::SchemeSet;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of an evaluation pass.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DesignConfigInner {
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct DesignConfig {
    #[serde(flatten, default)]
    inner: Arc<DesignConfigInner>,
}

impl Deref for DesignConfig {
    type Target = DesignConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for DesignConfig {
    fn deref_mut(&mut self) -> &mut DesignConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// API-wide HTTP defaults applied to a fresh root expression.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Common path prefix of every endpoint (e.g. `/api/:version`).
    pub path: String,
    pub schemes: SchemeSet,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    /// Seed the built-in default responses.
    pub default_responses: bool,
}

/// Log output of the evaluation tooling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub name: String,
    pub level: String,
    /// Extra `tracing` directives (e.g. `hdesign_http=trace`).
    pub filter: Option<String>,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    /// JSON lines for the log files; requires `directory`.
    pub json: bool,
    pub console: bool,
}

// --- Default ---

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            schemes: SchemeSet::HTTP,
            consumes: vec![DEFAULT_MIME.to_owned()],
            produces: vec![DEFAULT_MIME.to_owned()],
            default_responses: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "hdesign".to_owned(),
            level: "info".to_owned(),
            filter: None,
            directory: None,
            json: false,
            console: true,
        }
    }
}
