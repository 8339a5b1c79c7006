use std::borrow::Cow;

/// Errors surfaced by the [`Design`](crate::Design) entry point.
#[hdesign_derive::hdesign_error]
pub enum DesignError {
    #[error("Configuration failed{}: {source}", format_context(.context))]
    Config { source: hdesign_kernel::config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Logging set-up failed{}: {source}", format_context(.context))]
    Logger { source: hdesign_logger::LoggerError, context: Option<Cow<'static, str>> },

    #[error("Evaluation failed{}: {source}", format_context(.context))]
    Eval { source: hdesign_http::EvalError, context: Option<Cow<'static, str>> },
}
