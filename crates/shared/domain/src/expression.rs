use std::borrow::Cow;

/// Anything the evaluation engine can name in a diagnostic.
///
/// The returned label carries no behavior; it only shows up in error messages
/// (e.g. `resource "users"`).
pub trait Expression {
    fn eval_name(&self) -> Cow<'static, str>;
}
