//! Data layer for Bikeshare Stats.
//!
//! Responsible for reading the per-city trip CSV files, narrowing a loaded
//! dataset by month and weekday, and computing the four descriptive
//! statistics reports over the filtered result.

pub mod aggregator;
pub mod filter;
pub mod reader;

pub use stats_core as core;
