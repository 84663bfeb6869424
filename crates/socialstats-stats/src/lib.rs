//! Statistical utilities for the socialstats project.
//!
//! This crate provides the pure numeric routines used by the analysis layer:
//!
//! - **Quantiles**: Linear-interpolation quantiles over sorted data
//! - **Five-number summary**: Minimum, quartiles, and maximum for boxplots
//! - **Descriptive statistics**: Mean, median, variance, standard deviation
//!
//! # Modules
//!
//! - [`quantile`]: Quantile computation over sorted or unsorted slices
//! - [`summary`]: The five-number summary drawn by a boxplot
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//!
//! # Examples
//!
//! ## Computing a quantile
//!
//! ```
//! use socialstats_stats::quantile::quantile_sorted;
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(quantile_sorted(&values, 0.75), Some(3.25));
//! ```
//!
//! ## Computing a boxplot summary
//!
//! ```
//! use socialstats_stats::summary::QuantileSummary;
//!
//! let summary = QuantileSummary::new([10.0, 40.0, 20.0, 30.0]).unwrap();
//! assert_eq!(summary.median, 25.0);
//! ```
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use socialstats_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```

pub mod descriptive;
pub mod quantile;
pub mod summary;
