use crate::LinalgError;
use crate::functions::linear_algebra_ast;
use crate::syntax::Expr;

pub fn dispatch_linear_algebra_functions(
  name: &str,
  args: &[Expr],
) -> Option<Result<Expr, LinalgError>> {
  match name {
    "RowReduce" if args.len() == 1 => {
      Some(linear_algebra_ast::row_reduce_ast(args))
    }
    "MatrixRank" if args.len() == 1 => {
      Some(linear_algebra_ast::matrix_rank_ast(args))
    }
    "NullSpace" if args.len() == 1 => {
      Some(linear_algebra_ast::null_space_ast(args))
    }
    "LinearSolve" if args.len() == 2 => {
      Some(linear_algebra_ast::linear_solve_ast(args))
    }
    "SolutionSpace" if args.len() == 1 || args.len() == 2 => {
      Some(linear_algebra_ast::solution_space_ast(args))
    }
    "Det" if args.len() == 1 => Some(linear_algebra_ast::det_ast(args)),
    _ => None,
  }
}
