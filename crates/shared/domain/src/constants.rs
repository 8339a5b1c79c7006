//! String constants shared by the evaluator, the model and generators.

/// Name of the default view of a result type.
pub const DEFAULT_VIEW: &str = "default";

/// Identifier of the built-in media type used by error responses.
pub const ERROR_MEDIA: &str = "application/vnd.hdesign.error";

/// Diagnostic name of the HTTP root expression.
pub const ROOT_EVAL_NAME: &str = "API HTTP";

pub const SCHEME_HTTP: &str = "http";
pub const SCHEME_HTTPS: &str = "https";
pub const SCHEME_WS: &str = "ws";
pub const SCHEME_WSS: &str = "wss";

/// MIME type consumed and produced when nothing else is configured.
pub const DEFAULT_MIME: &str = "application/json";
