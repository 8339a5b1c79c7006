//! # Domain Models
//!
//! This crate contains the design-time types the HTTP model is built from: services and their
//! endpoints, attribute maps, encodings and URL schemes, plus the configuration shape.
//! Dependencies are limited to `serde` and `bitflags`.
//! Keep it lean: no I/O or heavy logic, just data and simple helpers.

pub mod attribute;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod expression;
pub mod schemes;
pub mod service;

pub use expression::Expression;
