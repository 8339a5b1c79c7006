use crate::error::EvalError;
use crate::root::RootExpr;
use hdesign_domain::Expression;
use tracing::{error, info, info_span};

/// Runs one evaluation pass over `root` and hands the finished aggregate back.
///
/// The root is threaded through by value: the DSL callback is its only writer for the duration
/// of the pass, and the caller gets it back once the pass succeeds.
///
/// # Errors
/// Returns whatever [`EvalError`] the DSL callback reports. Errors without a location are
/// attributed to the root expression.
pub fn evaluate<F>(mut root: RootExpr, dsl: F) -> Result<RootExpr, EvalError>
where
    F: FnOnce(&mut RootExpr) -> Result<(), EvalError>,
{
    let span = info_span!("evaluate", expr = %root.eval_name());
    let _guard = span.enter();

    if let Err(err) = dsl(&mut root) {
        let err = locate(err, &root);
        error!(error = %err, "design evaluation failed");
        return Err(err);
    }

    info!(
        resources = root.resources().len(),
        actions = root.resources().iter().map(|r| r.actions().len()).sum::<usize>(),
        responses = root.responses().len(),
        "design evaluated"
    );
    Ok(root)
}

fn locate(err: EvalError, root: &RootExpr) -> EvalError {
    match err {
        EvalError::Dsl { message, context: None } => {
            EvalError::Dsl { message, context: Some(root.eval_name()) }
        }
        other => other,
    }
}
