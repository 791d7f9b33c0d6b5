//! Core domain types and helpers for Bikeshare Stats.
//!
//! Holds the trip/dataset models, the error taxonomy, the mode and
//! frequency-count helpers shared by the aggregators, output formatting,
//! and the CLI settings struct.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
