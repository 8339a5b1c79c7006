//! Facade crate for the HTTP design model.
//! Re-exports the domain, kernel, logger and HTTP model crates and provides [`Design`], the
//! entry point of an evaluation pass.
//! Keep this crate thin: it should compose other crates, not implement model logic.
//!
//! ## Usage
//! ```rust
//! use hdesign::Design;
//! use hdesign::domain::service::{EndpointExpr, ServiceExpr};
//!
//! let users = ServiceExpr::new("users").endpoint(EndpointExpr::new("show")).shared();
//!
//! let root = Design::default()
//!     .evaluate(|root| {
//!         root.set_path("/api");
//!         root.resource_for(&users);
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(root.resources().len(), 1);
//! ```

mod error;

pub use crate::error::{DesignError, DesignErrorExt};
pub use hdesign_domain as domain;
pub use hdesign_http as http;
pub use hdesign_kernel as kernel;
pub use hdesign_logger as logger;

use hdesign_domain::config::DesignConfig;
use hdesign_http::{EvalError, RootExpr};
use hdesign_logger::Logger;
use std::path::Path;
use tracing::debug;

/// Configured entry point of an evaluation pass.
///
/// Each call to [`Design::evaluate`] builds a fresh [`RootExpr`] from the configuration and
/// returns it; nothing is kept in process-wide state.
#[derive(Debug, Default, Clone)]
pub struct Design {
    config: DesignConfig,
}

impl Design {
    #[must_use]
    pub const fn new(config: DesignConfig) -> Self {
        Self { config }
    }

    /// Loads the configuration file (plus `HDESIGN__*` overrides).
    ///
    /// # Errors
    /// Returns [`DesignError::Config`] if the file is missing or malformed.
    pub fn load(path: Option<impl AsRef<Path>>) -> Result<Self, DesignError> {
        let config = hdesign_kernel::config::load_design_config(path)?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub const fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// Installs the global tracing subscriber described by the logging configuration.
    ///
    /// # Errors
    /// Returns [`DesignError::Logger`] if the subscriber cannot be installed.
    pub fn init_logging(&self) -> Result<Logger, DesignError> {
        Ok(hdesign_logger::init_from_config(&self.config.logging)?)
    }

    /// Builds a root seeded with the configured defaults, then lets `dsl` populate it.
    ///
    /// # Errors
    /// Returns [`DesignError::Eval`] with the error reported by `dsl`.
    pub fn evaluate<F>(&self, dsl: F) -> Result<RootExpr, DesignError>
    where
        F: FnOnce(&mut RootExpr) -> Result<(), EvalError>,
    {
        let root = RootExpr::from_config(&self.config.http);
        debug!(
            path = %root.path,
            default_responses = root.default_responses().len(),
            "root expression initialized"
        );
        Ok(hdesign_http::evaluate(root, dsl)?)
    }
}
