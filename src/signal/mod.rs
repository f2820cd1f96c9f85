//! Per-sample processing blocks applied to extracted columns.
mod block;
mod evaluate;

pub use block::decibel::{to_decibels, Decibel, DecibelError};
pub use evaluate::handover::{
    CellChange, HandoverDetector, HandoverDetectorBuilder, HandoverEvent,
};

use ndarray::{Array1, ArrayView1};

/// A block that maps a run of samples onto a run of the same length.
pub trait SignalBlock<T> {
    type Error;

    fn reset(&mut self);

    fn process(&mut self, input: ArrayView1<T>) -> Result<Array1<T>, Self::Error>;
}

/// A block that watches a run of samples and reports discrete events.
/// State carries over between calls so a long signal may be fed in pieces.
pub trait EventBlock<T> {
    type Event;

    fn reset(&mut self);

    fn process(&mut self, input: ArrayView1<T>, obs: impl FnMut(Self::Event));
}
