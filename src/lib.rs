//! Mean relative error of job-shop heuristic runs.
//!
//! Each input line holds a schedule's makespan and its deviation from the
//! reference (`1523 12,7`); the aggregator reports the average deviation as
//! a percentage of the makespan.

pub mod aggregator;
pub mod error;
pub mod record;

pub use aggregator::{compute_mean_relative_error, format_mean, process_file, ErrorAggregator};
pub use error::{Error, Result};
pub use record::Record;
