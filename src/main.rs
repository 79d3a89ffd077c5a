mod frequency;
mod parse;
mod render;
mod report;
mod stats;
mod stemleaf;

use anyhow::{Context, Result};
use clap::Parser;
use std::{fs, io::Read, path::PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Comma-separated numeric values.
    #[arg(allow_hyphen_values = true)]
    data: Option<String>,

    /// Read the input text from a file instead.
    #[arg(long, conflicts_with = "data")]
    input_file: Option<PathBuf>,

    /// Emit one JSON report instead of tables.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let raw = read_input(&args).context("failed to read input")?;

    // Invalid input stops here: the message goes straight to the user and
    // nothing is rendered.
    let values = match parse::parse_input(&raw) {
        Ok(values) => values,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };
    log::info!("parsed {} values", values.len());

    let report = report::Report::build(&values);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        render::print_summary(&report.summary);
        render::print_stem_leaf(&report.stem_leaf);
        render::print_frequency(&report.frequency);
        render::print_frequency_chart(&report.frequency);
    }

    Ok(())
}

fn read_input(args: &CLI) -> Result<String> {
    if let Some(file) = &args.input_file {
        return fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"));
    }
    if let Some(data) = &args.data {
        return Ok(data.clone());
    }

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read stdin")?;
    Ok(raw)
}
