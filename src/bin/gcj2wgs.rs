//! Transforms a GCJ-02 coordinate into WGS-84 (or backwards with `--forward`).
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use gcjtrans::trans::{backward, backward_checked, forward};
use gcjtrans::Point;

/// GCJ2WGS: transforms a GCJ-02 coordinate (Chinese mapping services)
/// into WGS-84 (GPS).
#[derive(Parser, Debug)]
#[command(name = "gcj2wgs")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: gcj2wgs 39.1,106.1")]
struct Cli {
    /// Transform WGS-84 into GCJ-02 instead
    #[arg(long)]
    forward: bool,

    /// Fail when the search does not converge
    #[arg(long, conflicts_with = "forward")]
    strict: bool,

    /// Number of decimals of the output
    #[arg(short = 'd', long, default_value_t = 6)]
    decimals: usize,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The coordinate in degrees, latitude first
    #[arg(value_name = "LAT,LON", allow_hyphen_values = true)]
    coordinate: String,
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let input: Point = cli
        .coordinate
        .parse()
        .context("invalid input\nusage: gcj2wgs lat,lon\nexample: gcj2wgs 39.1,106.1")?;
    let input = Point::try_new(*input.latitude(), *input.longitude())?;
    debug!("input: {input:?}");

    let output = if cli.forward {
        forward(&input)?
    } else if cli.strict {
        backward_checked(&input)?
    } else {
        backward(&input)?
    };
    debug!("output: {output:?}");

    Ok(format!("{:.*}", cli.decimals, output))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match run(&cli) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
