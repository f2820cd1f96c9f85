//! Batch analysis of LTE simulator traces: detects handovers in an
//! RSRP/SINR statistics file and writes plot-ready series for a front end.
use handover_trace::config::Config;
use handover_trace::overrides::ProductTiedPath;
use handover_trace::session::{dump_product, AnalysisReport, AnalysisSession};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::{fs, path::PathBuf};

const ENV_PREFIX: &str = "HOTRACE";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(name = env!("CARGO_BIN_NAME"))]
/// LTE handover trace analyser
///
/// With no arguments, reads DlRsrpSinrStats.txt and throughput.out from
/// the current directory and prints a JSON report on stdout.
///
/// JSON Configuration Syntax (every key optional):
///
/// Config = {
///     ( "link_quality" : { "path": string, "format": Format } )*,
///     ( "throughput" : { "path": string | null, "format": Format } )*,
///     ( "ensemble" : Ensemble )*,
///     ( "handover" : { "initial_cell": number } )*,
///     ( "view" : { "time_limits": [number, number] | null,
///                  "cell_limits": [number, number] | null } )*
/// };
/// Ensemble = {
///     "pattern" : string,
///     ( "field" : Field )*,
///     ( "error_every" : number )*,
///     ( "format" : Format )*,
/// };
/// Format = {
///     "columns" : { Field : number, ... },
///     ( "delimiter" : "tab" | "whitespace" )*,
///     ( "header_lines" : number )*,
///     ( "malformed_rows" : "fail" | "skip" )*,
///     ( "expected_columns" : number )*,
///     ( "time_unit" : "seconds" | "milliseconds" )*,
/// };
/// Field = "time" | "cellid" | "rsrp" | "sinr" | "throughput";
///
/// Any key may also be set from the environment as HOTRACE__<key>__<key>.
pub struct Cli {
    /// Configuration file to use (JSON format)
    #[arg(short = 'c')]
    config_path: Option<PathBuf>,

    /// Directory that relative input paths and the ensemble pattern are
    /// resolved against.
    #[arg(short = 'd', default_value = ".")]
    base_dir: PathBuf,

    /// Write the JSON report here instead of stdout.
    #[arg(short = 'o')]
    output: Option<PathBuf>,

    /// Dump one data product as text columns to a file.
    #[arg(short = 'f', value_names = [ "product=dump-path" ])]
    dumps: Vec<ProductTiedPath>,

    /// More logging (repeat for more).
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::new(cli.config_path.as_deref(), ENV_PREFIX, ENV_SEPARATOR)
        .context("Failed to load configuration")?;

    let report = AnalysisSession::new(&config, &cli.base_dir)
        .run()
        .context("Analysis failed")?;

    write_dumps(&report, &cli.dumps)?;
    write_report(&report, cli.output.as_ref())?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

// Honour every -f request; a product that wasn't produced is only a warning.
fn write_dumps(report: &AnalysisReport, dumps: &[ProductTiedPath]) -> Result<()> {
    for spec in dumps {
        match report.product(spec.product) {
            Some(product) => {
                dump_product(product, &spec.path)
                    .with_context(|| format!("Failed to dump to {}", spec.path.display()))?;
                info!("dumped {:?} to {}", spec.product, spec.path.display());
            }
            None => warn!("{:?} was not produced, nothing dumped", spec.product),
        }
    }
    Ok(())
}

fn write_report(report: &AnalysisReport, output: Option<&PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialise report")?;
    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
