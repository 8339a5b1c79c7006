//! # HTTP Design Model
//!
//! The in-memory model of an HTTP API as produced by evaluating a design: a [`RootExpr`]
//! holding resources (one per service), their actions (one per endpoint), named responses and
//! API-wide request defaults. Code generators consume it read-only once evaluation completes.
//!
//! ```rust
//! use hdesign_domain::service::{EndpointExpr, ServiceExpr};
//! use hdesign_http::{RootExpr, extract_wildcards};
//!
//! let users = ServiceExpr::new("users").endpoint(EndpointExpr::new("show")).shared();
//!
//! let mut root = RootExpr::new();
//! let id = root.resource_for(&users).id();
//! assert_eq!(root.resource_for(&users).id(), id);
//! assert_eq!(extract_wildcards("/users/:id"), vec!["id"]);
//! ```

mod error;
mod eval;
pub mod resource;
pub mod response;
pub mod root;
pub mod wildcard;

pub use crate::error::{EvalError, EvalErrorExt};
pub use crate::eval::evaluate;
pub use crate::resource::{ActionExpr, ResourceExpr, ResourceId};
pub use crate::response::{HttpResponseExpr, builtin_responses};
pub use crate::root::RootExpr;
pub use crate::wildcard::{Wildcard, WildcardKind, extract_wildcards, wildcards};
