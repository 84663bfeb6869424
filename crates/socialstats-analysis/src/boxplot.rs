//! Per-group five-number summaries for boxplots
//!
//! [`summarize`] partitions records by a grouping field and computes a
//! [`QuantileSummary`] of a numeric field for each group. Groups keep the
//! order in which their key first appears in the input, which is the order
//! a chart lays them out along its category axis.
//!
//! # Example
//!
//! ```
//! use socialstats_analysis::{boxplot, record::Record};
//!
//! let records = [("A", 1.0), ("B", 10.0), ("A", 4.0), ("A", 2.0), ("A", 3.0)]
//!     .into_iter()
//!     .map(|(platform, likes)| {
//!         let mut record = Record::new();
//!         record.insert("Platform", platform);
//!         record.insert("Likes", likes);
//!         record
//!     })
//!     .collect::<Vec<_>>();
//!
//! let summaries = boxplot::summarize(&records, "Likes", "Platform")?;
//! assert_eq!(summaries.len(), 2);
//! assert_eq!(summaries["A"].q1, 1.75);
//! assert_eq!(summaries["B"].median, 10.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::ops::Index;

use indexmap::IndexMap;
use serde::Serialize;
use socialstats_stats::summary::QuantileSummary;

use crate::record::{Record, RecordError};

/// Quantile summaries keyed by group, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupSummaries {
    map: IndexMap<String, QuantileSummary>,
}

impl GroupSummaries {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QuantileSummary> {
        self.map.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Group keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuantileSummary)> + '_ {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Index<&str> for GroupSummaries {
    type Output = QuantileSummary;

    fn index(&self, key: &str) -> &Self::Output {
        &self.map[key]
    }
}

impl<'a> IntoIterator for &'a GroupSummaries {
    type Item = (&'a String, &'a QuantileSummary);
    type IntoIter = indexmap::map::Iter<'a, String, QuantileSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

/// Computes the five-number summary of `numeric_field` for every distinct
/// value of `group_field`.
///
/// Fails on the first record that lacks either field or whose numeric field
/// is not a finite number; no partial result is returned. Empty input yields
/// an empty map.
pub fn summarize(
    records: &[Record],
    numeric_field: &str,
    group_field: &str,
) -> Result<GroupSummaries, RecordError> {
    let mut groups = IndexMap::<String, Vec<f64>>::new();
    for (index, record) in records.iter().enumerate() {
        let key = record.group_key(group_field, index)?;
        let value = record.number(numeric_field, index)?;
        groups.entry(key).or_default().push(value);
    }

    let map = groups
        .into_iter()
        .filter_map(|(key, values)| QuantileSummary::new(values).map(|summary| (key, summary)))
        .collect::<IndexMap<_, _>>();

    tracing::debug!(
        numeric_field,
        group_field,
        records = records.len(),
        groups = map.len(),
        "computed group quantile summaries"
    );
    Ok(GroupSummaries { map })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[(&str, f64)]) -> Vec<Record> {
        rows.iter()
            .map(|&(platform, likes)| {
                let mut record = Record::new();
                record.insert("Platform", platform);
                record.insert("Likes", likes);
                record
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let summaries = summarize(&[], "Likes", "Platform").unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_singleton_group() {
        let summaries = summarize(&records(&[("A", 5.0)]), "Likes", "Platform").unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(
            summaries["A"],
            QuantileSummary {
                min: 5.0,
                q1: 5.0,
                median: 5.0,
                q3: 5.0,
                max: 5.0,
            }
        );
    }

    #[test]
    fn test_four_element_group() {
        let input = records(&[("A", 3.0), ("A", 1.0), ("A", 4.0), ("A", 2.0)]);
        let summary = summarize(&input, "Likes", "Platform").unwrap()["A"];
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.q1, 1.75);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q3, 3.25);
        assert_eq!(summary.max, 4.0);
    }

    #[test]
    fn test_groups_are_isolated() {
        let input = records(&[
            ("A", 1.0),
            ("B", 100.0),
            ("A", 2.0),
            ("B", 200.0),
            ("A", 3.0),
        ]);
        let summaries = summarize(&input, "Likes", "Platform").unwrap();
        assert_eq!(summaries["A"], QuantileSummary::new([1.0, 2.0, 3.0]).unwrap());
        assert_eq!(summaries["B"], QuantileSummary::new([100.0, 200.0]).unwrap());
        assert_eq!(summaries["B"].median, 150.0);
    }

    #[test]
    fn test_first_occurrence_order() {
        let input = records(&[
            ("Twitter", 1.0),
            ("Facebook", 1.0),
            ("Twitter", 1.0),
            ("Instagram", 1.0),
        ]);
        let summaries = summarize(&input, "Likes", "Platform").unwrap();
        assert_eq!(
            summaries.keys().collect::<Vec<_>>(),
            ["Twitter", "Facebook", "Instagram"]
        );
    }

    #[test]
    fn test_idempotent() {
        let input = records(&[("A", 9.0), ("B", 3.0), ("A", -1.0), ("C", 0.5)]);
        let first = summarize(&input, "Likes", "Platform").unwrap();
        let second = summarize(&input, "Likes", "Platform").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summaries_are_ordered() {
        let input = records(&[
            ("A", 17.0),
            ("A", 3.0),
            ("A", 250.0),
            ("A", 3.0),
            ("A", 91.0),
            ("B", 0.0),
            ("B", 12.5),
            ("B", 7.0),
        ]);
        for (key, summary) in &summarize(&input, "Likes", "Platform").unwrap() {
            assert!(summary.is_ordered(), "group {key}: {summary:?}");
        }
    }

    #[test]
    fn test_summaries_are_ordered_at_extreme_magnitudes() {
        let input = records(&[
            ("A", -1e308),
            ("A", 1e308),
            ("B", f64::MAX),
            ("B", -f64::MAX),
            ("B", 0.0),
            ("C", 5e-324),
            ("C", -5e-324),
            ("D", f64::MAX),
            ("D", f64::MAX),
        ]);
        let summaries = summarize(&input, "Likes", "Platform").unwrap();
        for (key, summary) in &summaries {
            assert!(summary.is_ordered(), "group {key}: {summary:?}");
            assert!(summary.median.is_finite(), "group {key}: {summary:?}");
        }
        assert_eq!(summaries["A"].min, -1e308);
        assert_eq!(summaries["A"].median, 0.0);
        assert_eq!(summaries["A"].max, 1e308);
        assert_eq!(summaries["D"].q3, f64::MAX);
    }

    #[test]
    fn test_text_values_are_parsed() {
        let input: Vec<Record> = vec![
            [("Platform", "A"), ("Likes", "10")].into_iter().collect(),
            [("Platform", "A"), ("Likes", " 20 ")].into_iter().collect(),
        ];
        let summaries = summarize(&input, "Likes", "Platform").unwrap();
        assert_eq!(summaries["A"].median, 15.0);
    }

    #[test]
    fn test_invalid_value_fails_whole_call() {
        let input: Vec<Record> = vec![
            [("Platform", "A"), ("Likes", "10")].into_iter().collect(),
            [("Platform", "B"), ("Likes", "n/a")].into_iter().collect(),
        ];
        let err = summarize(&input, "Likes", "Platform").unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidData {
                field: "Likes".into(),
                record: 1,
                value: "n/a".into(),
            }
        );
    }

    #[test]
    fn test_missing_group_field() {
        let input: Vec<Record> = vec![[("Likes", "10")].into_iter().collect()];
        let err = summarize(&input, "Likes", "Platform").unwrap_err();
        assert_eq!(
            err,
            RecordError::MissingField {
                field: "Platform".into(),
                record: 0,
            }
        );
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let input = records(&[("B", 2.0), ("A", 1.0)]);
        let summaries = summarize(&input, "Likes", "Platform").unwrap();
        let json = serde_json::to_string(&summaries).unwrap();
        assert!(json.starts_with(r#"{"B":{"min":2.0,"#), "{json}");
        assert!(json.contains(r#""A":{"min":1.0,"q1":1.0,"median":1.0,"q3":1.0,"max":1.0}"#));
    }
}
