//! Cross-file analysis: overlaying events on foreign series and
//! summarising repeated runs.
mod correlate;
mod ensemble;

pub use correlate::{overlay, Overlay};
pub use ensemble::{aggregate, EnsembleAggregator, EnsembleError, EnsembleMember, EnsembleSummary};
