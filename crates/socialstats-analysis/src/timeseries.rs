//! Daily time series for line charts
//!
//! Source tables label each post with a date such as `3/1/2024 (Friday)`.
//! [`TimeSeries::daily_average`] strips the weekday suffix, parses the date
//! and averages a numeric field per calendar day, producing one point per
//! date in ascending order.
//!
//! # Example
//!
//! ```
//! use socialstats_analysis::{
//!     record::Record,
//!     timeseries::{DEFAULT_DATE_FORMAT, TimeSeries},
//! };
//!
//! let rows = [
//!     ("3/2/2024 (Saturday)", 30.0),
//!     ("3/1/2024 (Friday)", 10.0),
//!     ("3/1/2024 (Friday)", 20.0),
//! ];
//! let records = rows
//!     .into_iter()
//!     .map(|(date, likes)| {
//!         let mut record = Record::new();
//!         record.insert("Date", date);
//!         record.insert("Likes", likes);
//!         record
//!     })
//!     .collect::<Vec<_>>();
//!
//! let series = TimeSeries::daily_average(&records, "Date", "Likes", DEFAULT_DATE_FORMAT)?;
//! assert_eq!(series.points().len(), 2);
//! assert_eq!(series.points()[0].mean, 15.0);
//! assert_eq!(series.max_value(), Some(30.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{collections::BTreeMap, fmt::Write as _, io};

use chrono::NaiveDate;
use socialstats_stats::descriptive::DescriptiveStats;

use crate::record::{Record, RecordError};

/// Date format of the `Date` column in the source data (`3/1/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Error raised while building a time series.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TimeSeriesError {
    #[display("invalid time-series record")]
    Record { source: RecordError },
    #[display("record #{record}: cannot parse date {value:?} in field '{field}'")]
    InvalidDate {
        field: String,
        record: usize,
        value: String,
        source: chrono::ParseError,
    },
}

impl From<RecordError> for TimeSeriesError {
    fn from(source: RecordError) -> Self {
        TimeSeriesError::Record { source }
    }
}

/// Removes surrounding whitespace and a trailing weekday label.
///
/// A suffix is stripped only when it is whitespace followed by a
/// parenthesized run of ASCII letters at the very end of the string.
/// Stripping also drops any whitespace before the parenthesis.
///
/// ```
/// use socialstats_analysis::timeseries::clean_date;
///
/// assert_eq!(clean_date(" 3/1/2024 (Friday) "), "3/1/2024");
/// assert_eq!(clean_date("3/1/2024"), "3/1/2024");
/// assert_eq!(clean_date("3/1/2024 (day 1)"), "3/1/2024 (day 1)");
/// ```
#[must_use]
pub fn clean_date(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_suffix(')') else {
        return trimmed;
    };
    let Some(open) = inner.rfind('(') else {
        return trimmed;
    };
    let label = &inner[open + 1..];
    let head = &inner[..open];
    let is_label = !label.is_empty() && label.chars().all(|c| c.is_ascii_alphabetic());
    if is_label && head.ends_with(char::is_whitespace) {
        head.trim_end()
    } else {
        trimmed
    }
}

/// Parses a date after [`clean_date`].
pub fn parse_date(raw: &str, format: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(clean_date(raw), format)
}

/// Aggregated value for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Number of records on this date.
    pub count: usize,
    pub mean: f64,
}

/// Points sorted by ascending date, one per distinct date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<DailyPoint>,
}

impl TimeSeries {
    /// Averages `numeric_field` per date found in `date_field`.
    ///
    /// Fails on the first record whose date cannot be parsed with `format`
    /// or whose numeric field is unusable.
    pub fn daily_average(
        records: &[Record],
        date_field: &str,
        numeric_field: &str,
        format: &str,
    ) -> Result<Self, TimeSeriesError> {
        let mut days = BTreeMap::<NaiveDate, Vec<f64>>::new();
        for (index, record) in records.iter().enumerate() {
            let raw = record.group_key(date_field, index)?;
            let date = parse_date(&raw, format).map_err(|source| TimeSeriesError::InvalidDate {
                field: date_field.to_owned(),
                record: index,
                value: raw.clone(),
                source,
            })?;
            let value = record.number(numeric_field, index)?;
            days.entry(date).or_default().push(value);
        }

        let points = days
            .into_iter()
            .filter_map(|(date, values)| {
                DescriptiveStats::new(values).map(|stats| DailyPoint {
                    date,
                    count: stats.count,
                    mean: stats.mean,
                })
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            date_field,
            numeric_field,
            days = points.len(),
            "computed daily averages"
        );
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[DailyPoint] {
        &self.points
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last date of the series.
    #[must_use]
    pub fn extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.points.first()?.date, self.points.last()?.date))
    }

    /// Largest daily mean.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.mean).max_by(f64::total_cmp)
    }

    /// Writes the series as CSV with header `Date,<value_column>`.
    ///
    /// A `date_format` that cannot render a date (an unknown specifier, or a
    /// time field such as `%H`) is reported as an `InvalidInput` I/O error
    /// before anything is written.
    pub fn write_csv<W>(
        &self,
        value_column: &str,
        date_format: &str,
        writer: W,
    ) -> Result<(), csv::Error>
    where
        W: io::Write,
    {
        let mut dates = Vec::with_capacity(self.points.len());
        for point in &self.points {
            let mut date = String::new();
            if write!(date, "{}", point.date.format(date_format)).is_err() {
                let err = io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid date format {date_format:?}"),
                );
                return Err(err.into());
            }
            dates.push(date);
        }

        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(["Date", value_column])?;
        for (date, point) in dates.iter().zip(&self.points) {
            let mean = point.mean.to_string();
            writer.write_record([date.as_str(), mean.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
