//! Chart-data preparation for social-media engagement tables
//!
//! This crate turns tabular post data (one row per post, with a platform,
//! a post type, a date and a like count) into the aggregates that statistical
//! charts are drawn from.
//!
//! # Overview
//!
//! 1. **Load Records** ([`record`]): Read CSV rows into [`record::Record`]s
//!    and coerce numeric columns
//! 2. **Boxplot** ([`boxplot`]): Five-number summary per group
//! 3. **Grouped Bars** ([`average`]): Mean per combination of grouping fields
//! 4. **Line Chart** ([`timeseries`]): Mean per calendar day
//!
//! All aggregations are pure functions of their input. They fail on the first
//! record whose fields are missing or unusable instead of producing partial
//! results.
//!
//! # Examples
//!
//! ```
//! use socialstats_analysis::{average, boxplot, record};
//!
//! let csv = "\
//! Platform,PostType,Likes
//! Instagram,video,120
//! Instagram,image,80
//! Twitter,video,30
//! Instagram,video,100
//! ";
//! let mut records = record::read_csv(csv.as_bytes())?;
//! record::coerce_all(&mut records, "Likes")?;
//!
//! let summaries = boxplot::summarize(&records, "Likes", "Platform")?;
//! assert_eq!(summaries["Instagram"].median, 100.0);
//!
//! let averages = average::average_by(&records, "Likes", &["Platform", "PostType"])?;
//! assert_eq!(averages[0].key, ["Instagram", "video"]);
//! assert_eq!(averages[0].mean(), 110.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod average;
pub mod boxplot;
pub mod record;
pub mod timeseries;
