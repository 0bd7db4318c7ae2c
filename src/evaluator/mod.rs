use crate::LinalgError;
use crate::syntax::Expr;

pub mod dispatch;

/// Evaluate an expression bottom-up: arguments first, then the call itself.
pub fn evaluate_expr(expr: &Expr) -> Result<Expr, LinalgError> {
  match expr {
    Expr::List(items) => Ok(Expr::List(
      items
        .iter()
        .map(evaluate_expr)
        .collect::<Result<Vec<_>, _>>()?,
    )),
    Expr::FunctionCall { name, args } => {
      let args = args
        .iter()
        .map(evaluate_expr)
        .collect::<Result<Vec<_>, _>>()?;
      dispatch::evaluate_function_call_ast(name, &args)
    }
    other => Ok(other.clone()),
  }
}
