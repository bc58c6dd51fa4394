//! # Housing Stats
//!
//! Reads a CSV register of residential buildings and reports on it.
//!
//! ## Features
//!
//! - Load typed house records from delimited text
//! - Classify buildings as Low-rise, Mid-rise or High-rise by floor count
//! - Count buildings per height category
//! - Find the building with the least residential area per resident
//! - Export the summary to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use housing_stats::analysis::summarize;
//! use housing_stats::parser::load_houses;
//!
//! let houses = load_houses("housing_data.csv").expect("Failed to load");
//! let summary = summarize(&houses).expect("Invalid floor count");
//! println!("{}", summary.category_counts);
//! ```

pub mod analysis;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
