//! Average command
//!
//! Writes the mean of a numeric field for every combination of grouping
//! fields, one CSV row per group.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use socialstats_analysis::average;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct AverageArg {
    /// Path to the posts CSV file
    pub input: PathBuf,

    /// Numeric column to average
    #[arg(long, default_value = "Likes")]
    pub value: String,

    /// Columns to group by (comma-separated)
    #[arg(long, value_delimiter = ',', default_values = ["Platform", "PostType"])]
    pub group: Vec<String>,

    /// Header of the averaged column in the output
    #[arg(long, default_value = "AvgLikes")]
    pub column: String,

    /// Output file (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AverageArg) -> anyhow::Result<()> {
    let records = util::read_records(&arg.input, &arg.value)?;
    let group_fields = arg.group.iter().map(String::as_str).collect::<Vec<_>>();

    let averages = average::average_by(&records, &arg.value, &group_fields)
        .with_context(|| format!("Failed to average {}", arg.input.display()))?;

    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_csv(|out| average::write_csv(&averages, &group_fields, &arg.column, out))?;
    tracing::info!(groups = averages.len(), output = %output.display_path(), "wrote averages");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_run_writes_csv() {
        let dir = std::env::temp_dir().join(format!("socialstats-average-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("posts.csv");
        let output = dir.join("avg.csv");
        fs::write(
            &input,
            "Platform,PostType,Likes\nA,video,10\nA,video,20\nA,image,5\n",
        )
        .unwrap();

        run(&AverageArg {
            input,
            value: "Likes".into(),
            group: vec!["Platform".into(), "PostType".into()],
            column: "AvgLikes".into(),
            output: Some(output.clone()),
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Platform,PostType,AvgLikes\nA,video,15\nA,image,5\n"
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}
