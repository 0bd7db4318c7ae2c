// Functions are organized by categories
pub mod eigen_ast;
pub mod linear_algebra_ast;
