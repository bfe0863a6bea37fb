//! Run the solar project projection from the command line
//!
//! Parameters start from the reference project, then a JSON parameter file
//! (if given), then individual flags. Output is a text summary, the JSON
//! dashboard or the yearly CSV table.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use solar_projection::{
    compute,
    parameters::{load_overrides, ParameterOverrides, ProjectParameters, DEFAULT_PROJECT_NAME},
    report::{render_summary, write_table_csv, Dashboard},
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// Metrics and yearly table as text
    Summary,
    /// Full dashboard document
    Json,
    /// Year-by-year table
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "solar_projection", version, about = "Cash-flow projection for a solar energy project")]
struct Cli {
    /// JSON parameter file (any subset of parameter fields)
    #[arg(short = 'p', long = "params")]
    params: Option<PathBuf>,

    #[command(flatten)]
    overrides: ParameterOverrides,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Output file (stdout by default)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Project name used in the dashboard title
    #[arg(long, default_value = DEFAULT_PROJECT_NAME)]
    project_name: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let file_overrides = match &cli.params {
        Some(path) => load_overrides(path)
            .with_context(|| format!("failed to read parameter file {}", path.display()))?,
        None => ParameterOverrides::default(),
    };
    let params = cli
        .overrides
        .clone()
        .layered_over(file_overrides)
        .apply(&ProjectParameters::default());

    let result = compute(&params).context("projection rejected the parameter set")?;
    info!("Projection complete in {:?}", start.elapsed());

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        OutputFormat::Summary => {
            let dashboard = Dashboard::build(&cli.project_name, &params, &result);
            write!(writer, "{}", render_summary(&dashboard))?;
        }
        OutputFormat::Json => {
            let dashboard = Dashboard::build(&cli.project_name, &params, &result);
            writeln!(writer, "{}", dashboard.to_json()?)?;
        }
        OutputFormat::Csv => write_table_csv(&result.records, &mut writer)?,
    }
    writer.flush()?;

    if let Some(path) = &cli.output {
        info!("Output written to {}", path.display());
    }
    Ok(())
}
