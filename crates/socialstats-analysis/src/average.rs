//! Group averages for grouped bar charts
//!
//! [`average_by`] groups records by one or more fields (for example platform
//! and post type) and reports descriptive statistics of a numeric field for
//! each combination. [`write_csv`] emits the result as a table with one row
//! per group, ready to be drawn as bars.

use std::io;

use indexmap::IndexMap;
use socialstats_stats::descriptive::DescriptiveStats;

use crate::record::{Record, RecordError};

/// Statistics of one group of records.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAverage {
    /// Values of the grouping fields, in the order the fields were given.
    pub key: Vec<String>,
    pub stats: DescriptiveStats,
}

impl GroupAverage {
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.stats.mean
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.stats.count
    }
}

/// Groups records by the tuple of `group_fields` values and computes
/// statistics of `numeric_field` per group.
///
/// Groups are returned in first-occurrence order. With no group fields every
/// record falls into a single group with an empty key.
pub fn average_by(
    records: &[Record],
    numeric_field: &str,
    group_fields: &[&str],
) -> Result<Vec<GroupAverage>, RecordError> {
    let mut groups = IndexMap::<Vec<String>, Vec<f64>>::new();
    for (index, record) in records.iter().enumerate() {
        let key = group_fields
            .iter()
            .map(|field| record.group_key(field, index))
            .collect::<Result<Vec<_>, _>>()?;
        let value = record.number(numeric_field, index)?;
        groups.entry(key).or_default().push(value);
    }

    let averages = groups
        .into_iter()
        .filter_map(|(key, values)| {
            DescriptiveStats::new(values).map(|stats| GroupAverage { key, stats })
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        numeric_field,
        group_fields = ?group_fields,
        groups = averages.len(),
        "computed group averages"
    );
    Ok(averages)
}

/// Writes averages as CSV with header `group_fields..., value_column`.
pub fn write_csv<W>(
    averages: &[GroupAverage],
    group_fields: &[&str],
    value_column: &str,
    writer: W,
) -> Result<(), csv::Error>
where
    W: io::Write,
{
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(group_fields.iter().copied().chain([value_column]))?;
    for average in averages {
        let mean = average.mean().to_string();
        writer.write_record(
            average
                .key
                .iter()
                .map(String::as_str)
                .chain([mean.as_str()]),
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[(&str, &str, f64)]) -> Vec<Record> {
        rows.iter()
            .map(|&(platform, post_type, likes)| {
                let mut record = Record::new();
                record.insert("Platform", platform);
                record.insert("PostType", post_type);
                record.insert("Likes", likes);
                record
            })
            .collect()
    }

    #[test]
    fn test_average_by_two_fields() {
        let input = records(&[
            ("Instagram", "video", 100.0),
            ("Instagram", "image", 40.0),
            ("Instagram", "video", 300.0),
            ("Twitter", "video", 10.0),
        ]);
        let averages = average_by(&input, "Likes", &["Platform", "PostType"]).unwrap();

        assert_eq!(averages.len(), 3);
        assert_eq!(averages[0].key, ["Instagram", "video"]);
        assert_eq!(averages[0].mean(), 200.0);
        assert_eq!(averages[0].count(), 2);
        assert_eq!(averages[0].stats.max, 300.0);
        assert_eq!(averages[0].stats.median, 200.0);
        assert_eq!(averages[1].key, ["Instagram", "image"]);
        assert_eq!(averages[1].mean(), 40.0);
        assert_eq!(averages[2].key, ["Twitter", "video"]);
    }

    #[test]
    fn test_no_group_fields() {
        let input = records(&[("A", "x", 1.0), ("B", "y", 3.0)]);
        let averages = average_by(&input, "Likes", &[]).unwrap();
        assert_eq!(averages.len(), 1);
        assert!(averages[0].key.is_empty());
        assert_eq!(averages[0].mean(), 2.0);
    }

    #[test]
    fn test_empty_input() {
        let averages = average_by(&[], "Likes", &["Platform"]).unwrap();
        assert!(averages.is_empty());
    }

    #[test]
    fn test_missing_group_field() {
        let input = records(&[("A", "x", 1.0)]);
        let err = average_by(&input, "Likes", &["Platform", "Region"]).unwrap_err();
        assert_eq!(
            err,
            RecordError::MissingField {
                field: "Region".into(),
                record: 0,
            }
        );
    }

    #[test]
    fn test_write_csv() {
        let input = records(&[
            ("Facebook", "link", 10.0),
            ("Facebook", "link", 15.0),
            ("LinkedIn", "text", 7.0),
        ]);
        let group_fields = ["Platform", "PostType"];
        let averages = average_by(&input, "Likes", &group_fields).unwrap();

        let mut out = Vec::new();
        write_csv(&averages, &group_fields, "AvgLikes", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Platform,PostType,AvgLikes\nFacebook,link,12.5\nLinkedIn,text,7\n"
        );
    }
}
