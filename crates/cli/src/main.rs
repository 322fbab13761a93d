mod input;
mod table;

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use ndarray::Array1;
use serde::Serialize;

use stepwise_core::{Formula, Scalar, SquareMatrix, format::Format};
use stepwise_observers::{Chain, ErrorTolerance, ResidualTolerance, TraceObserver};
use stepwise_solvers::{
    linear::{cramer, gauss_seidel, lu},
    optimization::{golden_section, quadratic},
    root::{muller, secant},
};

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use table::Table;

#[derive(Parser)]
#[command(
    name = "stepwise",
    version,
    about = "Classic numerical methods with step-by-step output"
)]
struct Cli {
    /// Print the solution as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a root with Muller's method
    Muller {
        /// Function of x, e.g. "x^3 - 6*x + 8"
        #[arg(short, long, value_parser = input::formula, allow_hyphen_values = true)]
        f: Formula,

        /// First initial guess (may be complex, e.g. "1+2i")
        #[arg(long, value_parser = input::scalar, allow_hyphen_values = true)]
        x0: Scalar,

        /// Second initial guess
        #[arg(long, value_parser = input::scalar, allow_hyphen_values = true)]
        x1: Scalar,

        /// Third initial guess
        #[arg(long, value_parser = input::scalar, allow_hyphen_values = true)]
        x2: Scalar,

        /// Number of iterations
        #[arg(short = 'n', long, default_value = "10")]
        iters: usize,

        /// Known root, used to report the true percent error
        #[arg(long, value_parser = input::scalar, allow_hyphen_values = true)]
        true_root: Option<Scalar>,

        /// Stop once |f(x3)| falls below this value
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Find a root with the secant method
    Secant {
        /// Function of x, e.g. "x^3 - x - 2"
        #[arg(short, long, value_parser = input::formula, allow_hyphen_values = true)]
        f: Formula,

        /// First initial guess
        #[arg(long, value_parser = input::scalar, allow_hyphen_values = true)]
        x0: Scalar,

        /// Second initial guess
        #[arg(long, value_parser = input::scalar, allow_hyphen_values = true)]
        x1: Scalar,

        /// Number of iterations
        #[arg(short = 'n', long, default_value = "10")]
        iters: usize,

        /// Stop once |f(x2)| falls below this value
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Find a maximum (or minimum) with golden section search
    Golden {
        /// Function of x, e.g. "e^-x * (x^2 - 3*x + 2)"
        #[arg(short, long, value_parser = input::formula, allow_hyphen_values = true)]
        f: Formula,

        /// Lower bound
        #[arg(long, value_parser = input::real, allow_hyphen_values = true)]
        xl: f64,

        /// Upper bound
        #[arg(long, value_parser = input::real, allow_hyphen_values = true)]
        xu: f64,

        /// Number of iterations
        #[arg(short = 'n', long, default_value = "10")]
        iters: usize,

        /// Search for a minimum instead of a maximum
        #[arg(long)]
        minimize: bool,
    },

    /// Estimate an optimum by quadratic interpolation
    Quadratic {
        /// Function of x, e.g. "2*sin(x) - x^2/10"
        #[arg(short, long, value_parser = input::formula, allow_hyphen_values = true)]
        f: Formula,

        #[arg(long, value_parser = input::real, allow_hyphen_values = true)]
        x0: f64,

        #[arg(long, value_parser = input::real, allow_hyphen_values = true)]
        x1: f64,

        #[arg(long, value_parser = input::real, allow_hyphen_values = true)]
        x2: f64,

        /// Number of interpolation steps
        #[arg(short = 'n', long, default_value = "1")]
        iters: usize,
    },

    /// Solve a 2x2 or 3x3 system with Cramer's rule
    Cramer {
        /// Coefficient matrix, rows separated by ';', e.g. "2,-1;1,3"
        #[arg(short, long, value_parser = input::complex_matrix, allow_hyphen_values = true)]
        a: SquareMatrix<Scalar>,

        /// Constants vector, e.g. "1,4"
        #[arg(short, long, value_parser = input::complex_vector, allow_hyphen_values = true)]
        b: Array1<Scalar>,
    },

    /// Solve a system by LU decomposition
    Lu {
        /// Coefficient matrix, rows separated by ';'
        #[arg(short, long, value_parser = input::complex_matrix, allow_hyphen_values = true)]
        a: SquareMatrix<Scalar>,

        /// Constants vector
        #[arg(
            short,
            long,
            value_parser = input::complex_vector,
            allow_hyphen_values = true,
            required_unless_present = "inverse_column"
        )]
        b: Option<Array1<Scalar>>,

        /// Solve for column k (starting at 1) of the inverse instead
        #[arg(long, conflicts_with = "b")]
        inverse_column: Option<usize>,
    },

    /// Solve a real system by Gauss-Seidel iteration
    GaussSeidel {
        /// Coefficient matrix, rows separated by ';'
        #[arg(short, long, value_parser = input::real_matrix, allow_hyphen_values = true)]
        a: SquareMatrix<f64>,

        /// Constants vector
        #[arg(short, long, value_parser = input::real_vector, allow_hyphen_values = true)]
        b: Array1<f64>,

        /// Initial guess (defaults to zeros)
        #[arg(long, value_parser = input::real_vector, allow_hyphen_values = true)]
        guess: Option<Array1<f64>>,

        /// Number of sweeps
        #[arg(short = 'n', long, default_value = "10")]
        iters: usize,

        /// Stop once every approximate error is below this percentage
        #[arg(long)]
        tolerance: Option<f64>,
    },
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Muller {
            f,
            x0,
            x1,
            x2,
            iters,
            true_root,
            tolerance,
        } => cmd_muller(json, &f, [x0, x1, x2], iters, true_root, tolerance),
        Commands::Secant {
            f,
            x0,
            x1,
            iters,
            tolerance,
        } => cmd_secant(json, &f, [x0, x1], iters, tolerance),
        Commands::Golden {
            f,
            xl,
            xu,
            iters,
            minimize,
        } => {
            let goal = if minimize {
                golden_section::Goal::Minimize
            } else {
                golden_section::Goal::Maximize
            };
            cmd_golden(json, &f, [xl, xu], goal, iters)
        }
        Commands::Quadratic {
            f,
            x0,
            x1,
            x2,
            iters,
        } => cmd_quadratic(json, &f, [x0, x1, x2], iters),
        Commands::Cramer { a, b } => cmd_cramer(json, &a, &b),
        Commands::Lu {
            a,
            b,
            inverse_column,
        } => cmd_lu(json, &a, b.as_ref(), inverse_column),
        Commands::GaussSeidel {
            a,
            b,
            guess,
            iters,
            tolerance,
        } => cmd_gauss_seidel(json, &a, &b, guess.as_ref(), iters, tolerance),
    }
}

fn cmd_muller(
    json: bool,
    f: &Formula,
    guesses: [Scalar; 3],
    iters: usize,
    true_root: Option<Scalar>,
    tolerance: Option<f64>,
) -> Result<()> {
    let config = muller::Config::new(iters, true_root)?;
    let observer = Chain(TraceObserver, tolerance.map(ResidualTolerance::new));
    let solution =
        muller::solve(f, guesses, &config, observer).context("Muller's method failed")?;

    if json {
        return print_json(&solution);
    }

    let format = Format::fixed(3);
    let mut table = Table::new([
        "iter", "h0", "h1", "s0", "s1", "a", "b", "c", "x3", "f(x3)", "Ea (%)", "Et (%)",
    ]);
    for step in &solution.steps {
        table.push(vec![
            iter_label(step.iter, step.held),
            format.scalar(step.h0),
            format.scalar(step.h1),
            format.scalar(step.s0),
            format.scalar(step.s1),
            format.scalar(step.a),
            format.scalar(step.b),
            format.scalar(step.c),
            format.scalar(step.x3),
            format.scalar(step.fx3),
            format.optional(step.ea),
            format.optional(step.et),
        ]);
    }

    print!("{table}");
    if solution.steps.iter().any(|step| step.held) {
        println!("* the iterates coincided, so x2 was held");
    }
    println!("\nroot: {}", format.scalar(solution.root));
    report_early_stop(solution.status == muller::Status::StoppedByObserver, solution.steps.len());
    Ok(())
}

fn cmd_secant(
    json: bool,
    f: &Formula,
    guesses: [Scalar; 2],
    iters: usize,
    tolerance: Option<f64>,
) -> Result<()> {
    let config = secant::Config::new(iters)?;
    let observer = Chain(TraceObserver, tolerance.map(ResidualTolerance::new));
    let solution =
        secant::solve(f, guesses, &config, observer).context("secant method failed")?;

    if json {
        return print_json(&solution);
    }

    let format = Format::fixed(6);
    let mut table = Table::new(["iter", "x0", "f(x0)", "x1", "f(x1)", "x2", "f(x2)"]);
    for step in &solution.steps {
        table.push(vec![
            step.iter.to_string(),
            format.scalar(step.x0),
            format.scalar(step.fx0),
            format.scalar(step.x1),
            format.scalar(step.fx1),
            format.scalar(step.x2),
            format.scalar(step.fx2),
        ]);
    }

    print!("{table}");
    println!("\nroot: {}", format.scalar(solution.root));
    report_early_stop(solution.status == secant::Status::StoppedByObserver, solution.steps.len());
    Ok(())
}

fn cmd_golden(
    json: bool,
    f: &Formula,
    bounds: [f64; 2],
    goal: golden_section::Goal,
    iters: usize,
) -> Result<()> {
    let config = golden_section::Config::new(iters)?;
    let solution = golden_section::solve(&f.real(), bounds, goal, &config, TraceObserver)
        .context("golden section search failed")?;

    if json {
        return print_json(&solution);
    }

    let format = Format::fixed(4);
    let mut table = Table::new([
        "iter", "xl", "f(xl)", "x2", "f(x2)", "x1", "f(x1)", "xu", "f(xu)", "d",
    ]);
    for step in &solution.steps {
        table.push(vec![
            step.iter.to_string(),
            format.real(step.xl),
            format.real(step.fxl),
            format.real(step.x2),
            format.real(step.fx2),
            format.real(step.x1),
            format.real(step.fx1),
            format.real(step.xu),
            format.real(step.fxu),
            format.real(step.d),
        ]);
    }

    print!("{table}");
    println!("\nx_opt: {}", format.real(solution.x_opt));
    println!("f_opt: {}", format.real(solution.f_opt));
    Ok(())
}

fn cmd_quadratic(json: bool, f: &Formula, points: [f64; 3], iters: usize) -> Result<()> {
    let config = quadratic::Config::new(iters)?;
    let solution = quadratic::solve(&f.real(), points, &config, TraceObserver)
        .context("quadratic interpolation failed")?;

    if json {
        return print_json(&solution);
    }

    let format = Format::fixed(6);
    let mut table = Table::new([
        "iter", "x0", "f(x0)", "x1", "f(x1)", "x2", "f(x2)", "x3", "f(x3)",
    ]);
    for step in &solution.steps {
        table.push(vec![
            iter_label(step.iter, step.held),
            format.real(step.x0),
            format.real(step.f0),
            format.real(step.x1),
            format.real(step.f1),
            format.real(step.x2),
            format.real(step.f2),
            format.real(step.x3),
            format.real(step.f3),
        ]);
    }

    print!("{table}");
    if solution.steps.iter().any(|step| step.held) {
        println!("* the points coincided, so the previous estimate was held");
    }
    println!("\nx3: {}", format.real(solution.x_opt));
    println!("f(x3): {}", format.real(solution.f_opt));
    Ok(())
}

fn cmd_cramer(json: bool, a: &SquareMatrix<Scalar>, b: &Array1<Scalar>) -> Result<()> {
    tracing::debug!(n = a.dim(), "solving with Cramer's rule");
    let solution = cramer::solve(a, b).context("Cramer's rule failed")?;

    if json {
        return print_json(&solution);
    }

    let format = Format::trimmed(6);
    println!("det(A) = {}", format.scalar(solution.det));
    for step in &solution.steps {
        println!(
            "\nA{} (column {} replaced by b), det = {}",
            step.column,
            step.column,
            format.scalar(step.det)
        );
        print!("{}", matrix_table(&format, &step.matrix));
    }

    println!();
    for (name, value) in solution.named() {
        println!("{name} = {value}");
    }
    Ok(())
}

fn cmd_lu(
    json: bool,
    a: &SquareMatrix<Scalar>,
    b: Option<&Array1<Scalar>>,
    inverse_column: Option<usize>,
) -> Result<()> {
    tracing::debug!(n = a.dim(), "solving by LU decomposition");
    let solution = match (b, inverse_column) {
        (Some(b), _) => lu::solve(a, b),
        (None, Some(k)) => {
            ensure!(k >= 1, "inverse columns are numbered from 1");
            lu::inverse_column(a, k - 1)
        }
        (None, None) => anyhow::bail!("either --b or --inverse-column is required"),
    }
    .context("LU decomposition failed")?;

    if json {
        return print_json(&solution);
    }

    let format = Format::trimmed(3);
    for step in &solution.steps {
        println!("After processing row {}", step.row);
        println!("L:");
        print!("{}", matrix_table(&format, &step.l));
        println!("U:");
        print!("{}", matrix_table(&format, &step.u));
        println!();
    }

    println!("y = [{}]", format.vector(&solution.y).join(", "));
    println!("x = [{}]", format.vector(&solution.x).join(", "));
    Ok(())
}

fn cmd_gauss_seidel(
    json: bool,
    a: &SquareMatrix<f64>,
    b: &Array1<f64>,
    guess: Option<&Array1<f64>>,
    iters: usize,
    tolerance: Option<f64>,
) -> Result<()> {
    let config = gauss_seidel::Config::new(iters)?;
    let observer = Chain(TraceObserver, tolerance.map(ErrorTolerance::new));
    let solution = gauss_seidel::solve(a, b, guess, &config, observer)
        .context("Gauss-Seidel iteration failed")?;

    if json {
        return print_json(&solution);
    }

    let n = a.dim();
    let format = Format::fixed(6);
    let headers = std::iter::once("iter".to_string())
        .chain((1..=n).map(|i| format!("x{i}")))
        .chain((1..=n).map(|i| format!("Ea{i} (%)")));
    let mut table = Table::new(headers);
    for step in &solution.steps {
        let row = std::iter::once(step.iter.to_string())
            .chain(step.x.iter().map(|&v| format.real(v)))
            .chain(step.ea.iter().map(|&v| format.real(v)))
            .collect();
        table.push(row);
    }

    print!("{table}");
    let x: Vec<String> = solution.x.iter().map(|&v| format.real(v)).collect();
    println!("\nx = [{}]", x.join(", "));
    report_early_stop(
        solution.status == gauss_seidel::Status::StoppedByObserver,
        solution.steps.len(),
    );
    Ok(())
}

/// Builds the log filter from `RUST_LOG`-style directives, showing warnings
/// when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn matrix_table(format: &Format, matrix: &SquareMatrix<Scalar>) -> Table {
    let mut table = Table::default();
    for row in format.matrix(matrix.as_array()) {
        table.push(row);
    }
    table
}

fn iter_label(iter: usize, held: bool) -> String {
    if held {
        format!("{iter}*")
    } else {
        iter.to_string()
    }
}

fn report_early_stop(stopped: bool, steps: usize) {
    if stopped {
        println!("stopped early after {steps} iterations: tolerance reached");
    }
}
