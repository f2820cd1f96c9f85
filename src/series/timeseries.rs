use ndarray::Array1;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SeriesError {
    #[error("{timestamps} timestamps for {values} values")]
    LengthMismatch { timestamps: usize, values: usize },
}

/// Values paired one to one with the timestamps they were logged at, in
/// file order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    timestamps: Array1<f64>,
    values: Array1<f64>,
}

impl TimeSeries {
    pub fn new(timestamps: Array1<f64>, values: Array1<f64>) -> Result<Self, SeriesError> {
        if timestamps.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        Ok(Self { timestamps, values })
    }

    pub fn timestamps(&self) -> &Array1<f64> {
        &self.timestamps
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Same samples with every timestamp multiplied by `factor`.
    pub fn rescale_time(&self, factor: f64) -> Self {
        Self {
            timestamps: &self.timestamps * factor,
            values: self.values.clone(),
        }
    }
}
