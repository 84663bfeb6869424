use clap::{Parser, Subcommand};

use self::{average::AverageArg, boxplot::BoxplotArg, timeseries::TimeseriesArg};

mod average;
mod boxplot;
mod timeseries;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log level used when `RUST_LOG` is not set (e.g. `warn`, `debug`)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// What chart data to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute per-group five-number summaries for a boxplot (JSON)
    Boxplot(#[clap(flatten)] BoxplotArg),
    /// Compute per-group averages for a grouped bar chart (CSV)
    Average(#[clap(flatten)] AverageArg),
    /// Compute daily averages for a line chart (CSV)
    Timeseries(#[clap(flatten)] TimeseriesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::logging::init(&args.log_level)?;
    match args.mode {
        Mode::Boxplot(arg) => boxplot::run(&arg)?,
        Mode::Average(arg) => average::run(&arg)?,
        Mode::Timeseries(arg) => timeseries::run(&arg)?,
    }
    Ok(())
}
