use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use socialstats_analysis::record::{self, Record};

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Output::Stdout {
                writer: io::stdout().lock(),
            });
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }

    /// Runs `write` against this output, labelling any failure with the destination.
    pub fn write_csv<F>(&mut self, write: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> Result<(), csv::Error>,
    {
        write(self).with_context(|| format!("Failed to write CSV to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Read records from a CSV file and coerce `numeric_field` to numbers.
///
/// # Errors
///
/// Returns error if the file cannot be read or any row holds a non-numeric value
pub fn read_records<P>(path: P, numeric_field: &str) -> anyhow::Result<Vec<Record>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading records");
    let mut records = record::load_csv(path)
        .with_context(|| format!("Failed to load CSV file: {}", path.display()))?;
    record::coerce_all(&mut records, numeric_field)
        .with_context(|| format!("Invalid data in {}", path.display()))?;
    tracing::info!(records = records.len(), "loaded records");
    Ok(records)
}
