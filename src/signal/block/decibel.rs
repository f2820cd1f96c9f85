use ndarray::{Array1, ArrayView1};
use num_traits::Float;
use thiserror::Error;

use crate::signal::SignalBlock;

#[derive(Error, Debug, PartialEq)]
pub enum DecibelError {
    #[error("sample {index} is {value}, log power needs a positive value")]
    NonPositive { index: usize, value: f64 },
}

/// `10 * log10(x)` for a linear power ratio. Zero, negative and NaN inputs
/// are rejected rather than mapped to -inf/NaN.
pub fn to_decibels<T: Float>(x: T) -> Option<T> {
    if x > T::zero() {
        let ten = T::from(10.0)?;
        Some(ten * x.log10())
    } else {
        None
    }
}

/// Signal processor that converts linear power samples to decibels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Decibel;

impl<T: Float> SignalBlock<T> for Decibel {
    type Error = DecibelError;

    fn reset(&mut self) {}

    fn process(&mut self, input: ArrayView1<T>) -> Result<Array1<T>, DecibelError> {
        input
            .iter()
            .enumerate()
            .map(|(index, &x)| {
                to_decibels(x).ok_or_else(|| DecibelError::NonPositive {
                    index,
                    value: x.to_f64().unwrap_or(f64::NAN),
                })
            })
            .collect::<Result<Array1<T>, DecibelError>>()
    }
}
