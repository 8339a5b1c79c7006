//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and owns config loading.
//!
//! ## Config loading
//! ```rust,ignore
//! use hdesign_kernel::config::load_design_config;
//!
//! let cfg = load_design_config(Some("design")).unwrap_or_default();
//! println!("base path: {}", cfg.http.path);
//! ```
pub mod config;

pub use hdesign_domain as domain;
