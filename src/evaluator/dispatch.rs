use crate::LinalgError;
use crate::syntax::Expr;

pub mod eigen_functions;
pub mod linear_algebra_functions;

pub fn evaluate_function_call_ast(
  name: &str,
  args: &[Expr],
) -> Result<Expr, LinalgError> {
  if let Some(result) =
    linear_algebra_functions::dispatch_linear_algebra_functions(name, args)
  {
    return result;
  }
  if let Some(result) = eigen_functions::dispatch_eigen_functions(name, args) {
    return result;
  }

  Err(LinalgError::EvaluationError(format!(
    "{}[...] with {} argument(s) is not supported",
    name,
    args.len()
  )))
}
