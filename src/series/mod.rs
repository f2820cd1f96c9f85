//! Named numeric series projected out of parsed rows.
mod extract;
mod timeseries;

pub use extract::{extract, ExtractError, SeriesSet};
pub use timeseries::{SeriesError, TimeSeries};
