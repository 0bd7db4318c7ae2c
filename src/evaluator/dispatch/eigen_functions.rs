use crate::LinalgError;
use crate::functions::eigen_ast;
use crate::syntax::Expr;

pub fn dispatch_eigen_functions(
  name: &str,
  args: &[Expr],
) -> Option<Result<Expr, LinalgError>> {
  match name {
    "CharacteristicPolynomial" if args.len() == 1 || args.len() == 2 => {
      Some(eigen_ast::characteristic_polynomial_ast(args))
    }
    "Eigenvalues" if args.len() == 1 => Some(eigen_ast::eigenvalues_ast(args)),
    "Eigenvectors" if args.len() == 1 => {
      Some(eigen_ast::eigenvectors_ast(args))
    }
    "Eigensystem" if args.len() == 1 => Some(eigen_ast::eigensystem_ast(args)),
    _ => None,
  }
}
