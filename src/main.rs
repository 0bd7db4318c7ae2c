use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use lineq::functions::linear_algebra_ast::{expr_to_matrix, expr_to_rhs};
use lineq::syntax::parse_expr;
use lineq::{
  EigenPair, LinalgError, Matrix, RootFinderConfig, SolutionRecord,
  eigensystem, interpret, solve,
};
use serde_json::{Value, json};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate an expression such as `Eigenvalues[{{2, 1}, {1, 2}}]`
  Eval {
    /// The expression to evaluate
    expression: String,
  },
  /// Solve A x = B, or A x = 0 without --rhs
  Solve {
    /// Coefficient matrix, e.g. "{{1, 1, 1}}"
    #[arg(short, long)]
    matrix: String,
    /// Right-hand side, e.g. "{3}" or "{{3}}"
    #[arg(short, long)]
    rhs: Option<String>,
    /// Print the solution as JSON
    #[arg(long)]
    json: bool,
  },
  /// Eigenvalues and eigenvector bases of a square matrix
  Eigen {
    /// Square matrix, e.g. "{{2, 1}, {1, 2}}"
    #[arg(short, long)]
    matrix: String,
    /// Root-finding iteration budget
    #[arg(long, default_value_t = RootFinderConfig::default().max_iterations)]
    max_iterations: usize,
    /// Relative convergence tolerance for root finding
    #[arg(long, default_value_t = RootFinderConfig::default().tolerance)]
    tolerance: f64,
    /// Print the eigensystem as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logger(cli.verbose);

  match cli.command {
    Commands::Eval { expression } => {
      let result = interpret(&expression)?;
      println!("{result}");
    }
    Commands::Solve { matrix, rhs, json } => {
      let a = parse_matrix(&matrix).context("invalid --matrix")?;
      let b = rhs
        .as_deref()
        .map(parse_vector)
        .transpose()
        .context("invalid --rhs")?;
      match solve(&a, b.as_deref()) {
        Ok(record) if json => println!("{}", solution_json(&record)),
        Ok(record) => print_solution(&record),
        Err(LinalgError::NoSolutionError) if json => {
          println!("{}", json!({ "solution": Value::Null }));
        }
        Err(e) => return Err(e.into()),
      }
    }
    Commands::Eigen {
      matrix,
      max_iterations,
      tolerance,
      json,
    } => {
      let a = parse_matrix(&matrix).context("invalid --matrix")?;
      let config = RootFinderConfig {
        max_iterations,
        tolerance,
      };
      let pairs = eigensystem(&a, &config)?;
      if json {
        println!("{}", eigen_json(&pairs));
      } else {
        print_eigensystem(&pairs);
      }
    }
  }

  Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v` flags pick the level.
fn init_logger(verbose: u8) {
  let level = match verbose {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };
  let mut builder = env_logger::Builder::new();
  builder.filter_level(level);
  if let Ok(spec) = std::env::var("RUST_LOG") {
    builder.parse_filters(&spec);
  }
  builder.init();
}

fn parse_matrix(text: &str) -> Result<Matrix> {
  Ok(expr_to_matrix(&parse_expr(text)?)?)
}

fn parse_vector(text: &str) -> Result<Vec<f64>> {
  Ok(expr_to_rhs(&parse_expr(text)?)?)
}

fn fmt_vector(v: &[f64]) -> String {
  let parts: Vec<String> =
    v.iter().map(|x| lineq::syntax::format_real(*x)).collect();
  format!("{{{}}}", parts.join(", "))
}

fn print_solution(record: &SolutionRecord) {
  println!("particular: {}", fmt_vector(&record.particular));
  if record.is_unique() {
    println!("unique solution");
  } else {
    for (i, v) in record.nullspace_basis.iter().enumerate() {
      println!("basis[{}]: {}", i, fmt_vector(v));
    }
  }
}

fn print_eigensystem(pairs: &[EigenPair]) {
  for pair in pairs {
    let value = lineq::syntax::format_complex(pair.value.re, pair.value.im);
    let basis: Vec<String> = pair.basis.iter().map(|v| fmt_vector(v)).collect();
    println!("{} -> {{{}}}", value, basis.join(", "));
  }
}

fn solution_json(record: &SolutionRecord) -> Value {
  json!({
    "particular": record.particular,
    "nullspace_basis": record.nullspace_basis,
  })
}

fn eigen_json(pairs: &[EigenPair]) -> Value {
  Value::Array(
    pairs
      .iter()
      .map(|pair| {
        json!({
          "eigenvalue": { "re": pair.value.re, "im": pair.value.im },
          "basis": pair.basis,
        })
      })
      .collect(),
  )
}
