use clap::Parser;
use gaussian_blur::config::{load_config, BlurToolConfig};
use gaussian_blur::image::io::write_json_file;
use gaussian_blur::kernel::validate_sigma;
use gaussian_blur::{blur_file, BlurError, BlurRequest, Strategy};
use log::info;
use std::path::PathBuf;

/// Apply a Gaussian blur to a binary (P5) PGM image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Input PGM file
    input: PathBuf,
    /// Output PGM file
    output: PathBuf,
    /// Standard deviation of the Gaussian, must be positive
    #[arg(allow_negative_numbers = true)]
    sigma: f64,
    /// JSON tool config (engine options, report path)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Convolution strategy, overrides the config file
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,
    /// Split output rows across threads
    #[arg(long)]
    parallel: bool,
    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BlurError> {
    // Reject σ before touching the config, input or output files.
    validate_sigma(cli.sigma)?;

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BlurToolConfig::default(),
    };

    let mut engine = config.engine;
    if let Some(strategy) = cli.strategy {
        engine = engine.with_strategy(strategy);
    }
    if cli.parallel {
        engine = engine.with_parallel(true);
    }
    let report_path = cli.report.or(config.report_json);

    let request = BlurRequest::new(cli.input, cli.output, cli.sigma).with_engine(engine);
    let report = blur_file(&request)?;

    if let Some(path) = report_path {
        write_json_file(&path, &report)?;
        info!("saved run report to {}", path.display());
    }
    Ok(())
}
