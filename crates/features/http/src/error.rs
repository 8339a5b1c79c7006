use crate::resource::ActionExpr;
use crate::root::RootExpr;
use hdesign_domain::Expression;
use std::borrow::Cow;

/// Errors reported while evaluating a design.
#[hdesign_derive::hdesign_error]
pub enum EvalError {
    /// The design itself is invalid; `context` names the offending expression.
    #[error("Invalid design{}: {message}", format_context(.context))]
    Dsl { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal evaluation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl EvalError {
    /// Builds a design error located at `expr`.
    pub fn at(expr: &impl Expression, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Dsl { message: message.into(), context: Some(expr.eval_name()) }
    }

    /// Builds a design error located at `action`, named through its owning resource in `root`.
    pub fn at_action(
        action: &ActionExpr,
        root: &RootExpr,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Dsl { message: message.into(), context: Some(action.eval_name(root)) }
    }
}
