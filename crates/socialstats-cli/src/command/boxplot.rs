//! Boxplot command
//!
//! Groups posts by a field and writes the five-number summary of a numeric
//! field for every group as a JSON object, in first-occurrence order.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use socialstats_analysis::boxplot;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct BoxplotArg {
    /// Path to the posts CSV file
    pub input: PathBuf,

    /// Numeric column to summarize
    #[arg(long, default_value = "Likes")]
    pub value: String,

    /// Column to group by
    #[arg(long, default_value = "Platform")]
    pub group: String,

    /// Output file (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &BoxplotArg) -> anyhow::Result<()> {
    let records = util::read_records(&arg.input, &arg.value)?;

    let summaries = boxplot::summarize(&records, &arg.value, &arg.group)
        .with_context(|| format!("Failed to summarize {}", arg.input.display()))?;
    for (group, summary) in summaries.iter() {
        tracing::info!(
            group,
            min = summary.min,
            median = summary.median,
            max = summary.max,
            "summarized group"
        );
    }

    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_json(&summaries)?;
    tracing::info!(groups = summaries.len(), output = %output.display_path(), "wrote summaries");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_run_writes_json() {
        let dir = std::env::temp_dir().join(format!("socialstats-boxplot-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("posts.csv");
        let output = dir.join("summaries.json");
        fs::write(
            &input,
            "Platform,PostType,Likes\nB,video,4\nA,image,1\nB,video,2\nA,link,3\n",
        )
        .unwrap();

        run(&BoxplotArg {
            input,
            value: "Likes".into(),
            group: "Platform".into(),
            output: Some(output.clone()),
        })
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["B"]["median"], 3.0);
        assert_eq!(json["A"]["min"], 1.0);
        assert_eq!(json["A"]["max"], 3.0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_rejects_non_numeric_values() {
        let dir = std::env::temp_dir().join(format!("socialstats-invalid-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("posts.csv");
        fs::write(&input, "Platform,Likes\nA,12\nA,twelve\n").unwrap();

        let err = run(&BoxplotArg {
            input,
            value: "Likes".into(),
            group: "Platform".into(),
            output: Some(dir.join("unused.json")),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("'Likes' is not numeric"), "{err:#}");

        fs::remove_dir_all(&dir).unwrap();
    }
}
