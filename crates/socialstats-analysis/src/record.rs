//! Tabular records and CSV loading
//!
//! A [`Record`] is one row of a table: a mapping from field name to
//! [`FieldValue`]. Records read from CSV start out with every cell as
//! [`FieldValue::Text`]; numeric columns can be coerced once at load time
//! with [`coerce_all`], or converted lazily by [`Record::number`].
//!
//! # Example
//!
//! ```
//! use socialstats_analysis::record::{self, FieldValue};
//!
//! let csv = "Platform,PostType,Likes\nInstagram,video,120\nTwitter,image,45\n";
//! let mut records = record::read_csv(csv.as_bytes())?;
//! record::coerce_all(&mut records, "Likes")?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].get("Likes"), Some(&FieldValue::Number(120.0)));
//! assert_eq!(records[1].group_key("Platform", 1)?, "Twitter");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{
    collections::HashMap,
    fmt,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

/// A single cell of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Raw text, as read from the source table.
    Text(String),
    /// A numeric value.
    Number(f64),
}

impl FieldValue {
    /// Interprets the value as a finite number.
    ///
    /// Text is trimmed and parsed as `f64`. Empty text, unparsable text,
    /// and non-finite numbers (`NaN`, `inf`) yield `None`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Error raised when a record lacks a field or holds an unusable value.
///
/// `record` is the 0-based index of the offending record in its input slice.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum RecordError {
    #[display("record #{record} has no field '{field}'")]
    MissingField { field: String, record: usize },
    #[display("record #{record}: field '{field}' is not numeric (value: {value:?})")]
    InvalidData {
        field: String,
        record: usize,
        value: String,
    },
}

/// Error raised while reading records from CSV.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to open {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("failed to read CSV data")]
    Csv { source: csv::Error },
}

impl From<csv::Error> for LoadError {
    fn from(source: csv::Error) -> Self {
        LoadError::Csv { source }
    }
}

/// One row of a table, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert<K, V>(&mut self, field: K, value: V) -> Option<FieldValue>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(field.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reads `field` as a finite number.
    ///
    /// `index` is the record's position in its input and is only used to
    /// label the error.
    pub fn number(&self, field: &str, index: usize) -> Result<f64, RecordError> {
        let value = self.require(field, index)?;
        value.as_number().ok_or_else(|| RecordError::InvalidData {
            field: field.to_owned(),
            record: index,
            value: value.to_string(),
        })
    }

    /// Reads `field` as a grouping key.
    ///
    /// Text is used verbatim; numbers are rendered with their `Display` form.
    pub fn group_key(&self, field: &str, index: usize) -> Result<String, RecordError> {
        self.require(field, index).map(ToString::to_string)
    }

    /// Replaces `field` with its numeric interpretation.
    ///
    /// On failure the record is left unchanged.
    pub fn coerce_numeric(&mut self, field: &str, index: usize) -> Result<(), RecordError> {
        let n = self.number(field, index)?;
        self.fields.insert(field.to_owned(), FieldValue::Number(n));
        Ok(())
    }

    fn require(&self, field: &str, index: usize) -> Result<&FieldValue, RecordError> {
        self.fields.get(field).ok_or_else(|| RecordError::MissingField {
            field: field.to_owned(),
            record: index,
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let fields = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { fields }
    }
}

/// Coerces `field` to a number in every record.
///
/// Stops at the first record that cannot be coerced; records before it have
/// already been converted.
pub fn coerce_all(records: &mut [Record], field: &str) -> Result<(), RecordError> {
    records
        .iter_mut()
        .enumerate()
        .try_for_each(|(index, record)| record.coerce_numeric(field, index))
}

/// Reads records from CSV data with a header row.
///
/// Cells are trimmed and stored as [`FieldValue::Text`]. A row whose cell
/// count differs from the header is an error.
pub fn read_csv<R>(reader: R) -> Result<Vec<Record>, LoadError>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let records = reader
        .records()
        .map(|row| {
            let row = row?;
            Ok(headers.iter().zip(row.iter()).collect::<Record>())
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    tracing::debug!(
        columns = headers.len(),
        records = records.len(),
        "read CSV records"
    );
    Ok(records)
}

/// Reads records from a CSV file.
pub fn load_csv<P>(path: P) -> Result<Vec<Record>, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    read_csv(BufReader::new(file))
}
