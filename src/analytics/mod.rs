//! Read-only query and aggregation layer over recorded shots.
//! Never mutates the store.

pub mod aggregate;
pub mod filter;
pub mod outcome;
pub mod scatter;

pub use aggregate::{average_distance, miss_tally, unique_courses};
pub use filter::ShotFilter;
pub use outcome::{categorize_result, Outcome};
pub use scatter::{ScatterPlot, ScatterRange};
