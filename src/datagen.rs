//! Synthetic ILI dataset generator.
//!
//! Writes weekly surveillance rows for a handful of states with seasonal
//! peaks and occasional missing weeks, as CSV or Brotli-compressed CSV.

use anyhow::{Context, Result};
use clap::Parser;
use ilidash::synthetic::write_dataset;
use ilidash::{IliWriter, SyntheticConfig, DEFAULT_DATASET_PATH};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ili-datagen", about = "Generate a synthetic ILI surveillance dataset")]
struct Args {
    /// Number of states (1 to 50)
    #[arg(long, default_value_t = 10)]
    states: usize,

    /// Weeks per state
    #[arg(long, default_value_t = 260)]
    weeks: usize,

    /// First epiweek as YYYYWW
    #[arg(long, default_value_t = 201540)]
    start_epiweek: u32,

    /// Probability that a week's ILI value is left empty
    #[arg(long, default_value_t = 0.02)]
    missing_rate: f64,

    /// Random seed; the same seed always produces the same file
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output path (default: ilidata.csv, or ilidata.csv.br with --brotli)
    #[arg(short, long, value_name = "PATH")]
    out: Option<String>,

    /// Compress the output with Brotli
    #[arg(long)]
    brotli: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = SyntheticConfig {
        states: args.states,
        weeks: args.weeks,
        start_epiweek: args.start_epiweek,
        missing_rate: args.missing_rate,
        seed: args.seed,
    };
    config.validate()?;

    let out = output_path(args.out, args.brotli);
    info!(
        path = %out,
        states = config.states,
        weeks = config.weeks,
        seed = config.seed,
        "generating dataset"
    );

    let mut writer = IliWriter::new(&out)
        .with_context(|| format!("Failed to create output file: {}", out))?;
    write_dataset(&config, &mut writer)?;
    let rows = writer.finish()?;

    info!(path = %out, rows, "dataset written");
    Ok(())
}

/// Resolves the output path, adding `.br` when compressing.
fn output_path(out: Option<String>, brotli: bool) -> String {
    let path = out.unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string());
    if brotli && !path.ends_with(".br") {
        format!("{}.br", path)
    } else {
        path
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["ilidash", "ili_datagen"] {
        match format!("{}={}", target, level).parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("invalid log directive for {}: {}", target, e),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(None, false), "ilidata.csv");
        assert_eq!(output_path(None, true), "ilidata.csv.br");
        assert_eq!(output_path(Some("x.csv.br".to_string()), true), "x.csv.br");
        assert_eq!(output_path(Some("x.csv".to_string()), false), "x.csv");
    }
}
