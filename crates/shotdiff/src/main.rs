mod error;
mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use shotdiff_operations::config::{ConfigOverrides, load_config};
use shotdiff_operations::operations::{CompareInput, compare_directories};
use tracing::debug;

use crate::error::{CliError, Result};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "shotdiff")]
#[command(version, about = "Compare two directories of PNG screenshots", long_about = None)]
struct Cli {
    /// Directory holding the reference screenshots
    baseline_dir: PathBuf,

    /// Directory holding the screenshots to check
    candidate_dir: PathBuf,

    /// Directory receiving derived images and the HTML report (created if missing)
    output_dir: PathBuf,

    /// Per-pixel color distance threshold between 0 and 1
    #[arg(long)]
    threshold: Option<f64>,

    /// Detect anti-aliased pixels and exclude them from the difference count
    #[arg(long)]
    anti_aliasing: bool,

    /// Count anti-aliased pixels as differences, overriding the config file
    #[arg(long, conflicts_with = "anti_aliasing")]
    no_anti_aliasing: bool,

    /// TOML file with a [compare] table
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Console output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Suppress console output except errors
    #[arg(long, short)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir().map_err(CliError::CurrentDir)?;
    let baseline_dir = resolve(&cwd, &cli.baseline_dir);
    let candidate_dir = resolve(&cwd, &cli.candidate_dir);
    let output_dir = resolve(&cwd, &cli.output_dir);

    require_directory("baseline", &baseline_dir)?;
    require_directory("candidate", &candidate_dir)?;
    prepare_output_dir(&output_dir)?;

    let overrides = overrides(&cli);
    let config_path = cli.config.as_deref().map(|path| resolve(&cwd, path));
    let options = load_config(config_path.as_deref(), &overrides)?;
    debug!(?options, "resolved comparison options");

    let input = CompareInput {
        baseline_dir,
        candidate_dir,
        output_dir,
        options,
    };
    let output = compare_directories(&input)?;

    if !cli.quiet {
        print!("{}", cli.format.formatter().format(&input, &output)?);
    }

    Ok(output.summary.exit_code)
}

fn overrides(cli: &Cli) -> ConfigOverrides {
    let anti_aliasing = if cli.anti_aliasing {
        Some(true)
    } else if cli.no_anti_aliasing {
        Some(false)
    } else {
        None
    };

    ConfigOverrides {
        threshold: cli.threshold,
        anti_aliasing,
    }
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn require_directory(role: &'static str, path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(CliError::InvalidDirectory {
            role,
            path: path.to_path_buf(),
        })
    }
}

fn prepare_output_dir(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(CliError::OutputNotDirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|source| CliError::CreateOutputDir {
        path: path.to_path_buf(),
        source,
    })
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
