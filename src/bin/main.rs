//! treesvm Command Line Interface
//!
//! Loads a labeled CSV file, partitions it by class and reports the
//! feature-space geometry of the classes under a chosen kernel.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use treesvm::api::{quick, ClassGeometry, GeometryEstimator};
use treesvm::core::{GeometryError, Result};
use treesvm::kernel::{ChiSquareKernel, Kernel, LinearKernel, PolynomialKernel, RBFKernel};
use treesvm::persistence::GeometryReport;

#[derive(Parser)]
#[command(name = "treesvm")]
#[command(about = "Kernel-space geometry of labeled classes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "treesvm Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the classes of a data file
    Classes(ClassesArgs),
    /// Compute squared radii and centroid distances of every class
    Geometry(GeometryArgs),
    /// Display a saved geometry report
    Info(InfoArgs),
}

#[derive(Args)]
struct ClassesArgs {
    /// Data file (CSV, label in the last column)
    #[arg(long)]
    data: PathBuf,
}

#[derive(Args)]
struct GeometryArgs {
    /// Data file (CSV, label in the last column)
    #[arg(long)]
    data: PathBuf,

    /// Kernel function
    #[arg(short, long, default_value = "linear")]
    kernel: CliKernel,

    /// Kernel gamma (defaults to 1 / number of features)
    #[arg(short, long)]
    gamma: Option<f64>,

    /// Polynomial degree
    #[arg(long, default_value = "3")]
    degree: u32,

    /// Polynomial independent term
    #[arg(long, default_value = "1.0")]
    coef0: f64,

    /// Kernel cache size in Gram entries (0 disables caching)
    #[arg(long, default_value = "0")]
    cache_size: usize,

    /// Relative rounding tolerance of the centroid distance check
    #[arg(long, default_value = "1e-9")]
    tolerance: f64,

    /// Save the geometry report as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct InfoArgs {
    /// Geometry report file
    report: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum CliKernel {
    /// Dot product
    #[value(name = "linear")]
    Linear,
    /// Gaussian radial basis function
    #[value(name = "rbf")]
    Rbf,
    /// (gamma * x.y + coef0)^degree
    #[value(name = "polynomial")]
    Polynomial,
    /// Exponential chi-square, for histogram features
    #[value(name = "chi-square")]
    ChiSquare,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Classes(args) => classes_command(args),
        Commands::Geometry(args) => geometry_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn classes_command(args: ClassesArgs) -> Result<()> {
    info!("Loading classes from: {:?}", args.data);
    let classes = quick::load_classes(&args.data)?;

    println!("Samples: {}", classes.total_samples());
    println!("Features: {}", classes.dim());
    println!("Classes: {}", classes.len());
    for set in &classes {
        println!("  {}: {} samples", set.label(), set.len());
    }

    Ok(())
}

fn geometry_command(args: GeometryArgs) -> Result<()> {
    info!("Loading classes from: {:?}", args.data);
    let classes = quick::load_classes(&args.data)?;

    let kernel = build_kernel(&args, classes.dim())?;
    info!("Kernel: {}", kernel.describe());

    let estimator = GeometryEstimator::with_kernel(kernel)
        .with_cache_size(args.cache_size)
        .with_tolerance(args.tolerance);
    let geometry = estimator.class_geometry(&classes)?;

    print_geometry(&geometry);

    if let Some(output) = &args.output {
        let report =
            GeometryReport::from_class_geometry(&geometry, estimator.kernel(), estimator.config());
        report.save_to_file(output)?;
        println!("\nReport saved to: {output:?}");
    }

    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    info!("Loading report from: {:?}", args.report);
    let report = GeometryReport::load_from_file(&args.report)?;

    report.print_summary();
    println!();
    print_geometry(&report.to_class_geometry()?);

    Ok(())
}

fn build_kernel(args: &GeometryArgs, n_features: usize) -> Result<Box<dyn Kernel>> {
    let gamma = args.gamma.unwrap_or(1.0 / n_features.max(1) as f64);
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(GeometryError::InvalidParameter(format!(
            "Gamma must be positive, got: {gamma}"
        )));
    }

    let kernel: Box<dyn Kernel> = match args.kernel {
        CliKernel::Linear => Box::new(LinearKernel::new()),
        CliKernel::Rbf => Box::new(RBFKernel::new(gamma)),
        CliKernel::Polynomial => {
            if args.degree == 0 {
                return Err(GeometryError::InvalidParameter(
                    "Polynomial degree must be positive".to_string(),
                ));
            }
            Box::new(PolynomialKernel::new(args.degree, gamma, args.coef0))
        }
        CliKernel::ChiSquare => Box::new(ChiSquareKernel::new(gamma)),
    };

    Ok(kernel)
}

fn print_geometry(geometry: &ClassGeometry) {
    println!("Squared radii:");
    for ((label, size), radius) in geometry
        .labels()
        .iter()
        .zip(geometry.sizes())
        .zip(geometry.squared_radii())
    {
        println!("  {label} (n={size}): {radius:.6}");
    }

    println!("\nSquared centroid distances:");
    let distances = geometry.squared_distances();
    for (label, row) in geometry.labels().iter().zip(distances.outer_iter()) {
        let cells: Vec<String> = row.iter().map(|d| format!("{d:.6}")).collect();
        println!("  {label}: {}", cells.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry_args(kernel: CliKernel) -> GeometryArgs {
        GeometryArgs {
            data: PathBuf::from("unused.csv"),
            kernel,
            gamma: None,
            degree: 3,
            coef0: 1.0,
            cache_size: 0,
            tolerance: 1e-9,
            output: None,
        }
    }

    #[test]
    fn test_build_kernel_auto_gamma() {
        let kernel = build_kernel(&geometry_args(CliKernel::Rbf), 4).unwrap();
        assert_eq!(kernel.describe(), "rbf(gamma=0.25)");
    }

    #[test]
    fn test_build_kernel_rejects_bad_parameters() {
        let mut args = geometry_args(CliKernel::Rbf);
        args.gamma = Some(-1.0);
        assert!(matches!(
            build_kernel(&args, 2),
            Err(GeometryError::InvalidParameter(_))
        ));

        let mut args = geometry_args(CliKernel::Polynomial);
        args.degree = 0;
        assert!(matches!(
            build_kernel(&args, 2),
            Err(GeometryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_cli_parses_geometry() {
        let cli = Cli::try_parse_from([
            "treesvm", "geometry", "--data", "train.csv", "--kernel", "chi-square", "--gamma", "0.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Geometry(args) => {
                assert_eq!(args.kernel, CliKernel::ChiSquare);
                assert_eq!(args.gamma, Some(0.5));
                assert_eq!(args.cache_size, 0);
            }
            _ => panic!("expected geometry subcommand"),
        }
    }
}
