//! Time-series command
//!
//! Averages a numeric field per calendar day and writes the series as CSV,
//! sorted by date.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use socialstats_analysis::timeseries::{DEFAULT_DATE_FORMAT, TimeSeries};

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct TimeseriesArg {
    /// Path to the posts CSV file
    pub input: PathBuf,

    /// Date column; a trailing weekday label like " (Friday)" is ignored
    #[arg(long, default_value = "Date")]
    pub date: String,

    /// Numeric column to average
    #[arg(long, default_value = "Likes")]
    pub value: String,

    /// strftime-style format of the date column
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Header of the averaged column in the output
    #[arg(long, default_value = "Likes")]
    pub column: String,

    /// Output file (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &TimeseriesArg) -> anyhow::Result<()> {
    let records = util::read_records(&arg.input, &arg.value)?;

    let series = TimeSeries::daily_average(&records, &arg.date, &arg.value, &arg.date_format)
        .with_context(|| format!("Failed to build time series from {}", arg.input.display()))?;
    if let Some((first, last)) = series.extent() {
        tracing::info!(
            %first,
            %last,
            max = series.max_value(),
            "time series extent"
        );
    } else {
        tracing::warn!("time series is empty");
    }

    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_csv(|out| series.write_csv(&arg.column, &arg.date_format, out))?;
    tracing::info!(
        days = series.points().len(),
        output = %output.display_path(),
        "wrote time series"
    );
    Ok(())
}
