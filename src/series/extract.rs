use ndarray::Array1;
use thiserror::Error;

use super::timeseries::TimeSeries;
use crate::datasource::{ColumnSchema, Field, MeasurementRow, Transform};
use crate::signal::{Decibel, DecibelError, SignalBlock};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("format maps no time column")]
    NoTimeColumn,
    #[error("line {line}: no value for {field} (column {column})")]
    MissingValue {
        field: Field,
        column: usize,
        line: usize,
    },
    #[error("line {line}: {field} out of domain")]
    Domain {
        field: Field,
        line: usize,
        #[source]
        source: DecibelError,
    },
}

/// Every mapped field of one file, sharing that file's time column.
#[derive(Debug, Clone)]
pub struct SeriesSet {
    time: Array1<f64>,
    columns: Vec<Option<Array1<f64>>>,
}

impl SeriesSet {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    /// Transformed values of a mapped field, `None` if the format doesn't
    /// carry it.
    pub fn values(&self, field: Field) -> Option<&Array1<f64>> {
        if field == Field::Time {
            return Some(&self.time);
        }
        self.columns[usize::from(field)].as_ref()
    }

    pub fn series(&self, field: Field) -> Option<TimeSeries> {
        let values = self.values(field)?;
        TimeSeries::new(self.time.clone(), values.clone()).ok()
    }
}

fn column(
    rows: &[MeasurementRow],
    field: Field,
    column: usize,
) -> Result<Array1<f64>, ExtractError> {
    rows.iter()
        .map(|row| {
            row.get(column).ok_or(ExtractError::MissingValue {
                field,
                column,
                line: row.line(),
            })
        })
        .collect()
}

/// Project rows onto the schema's fields. Power fields go through the
/// decibel block; a non-positive sample fails the whole extraction and
/// names the offending line.
pub fn extract(rows: &[MeasurementRow], schema: &ColumnSchema) -> Result<SeriesSet, ExtractError> {
    let time_col = schema.column(Field::Time).ok_or(ExtractError::NoTimeColumn)?;
    let time = column(rows, Field::Time, time_col)?;

    let mut columns: Vec<Option<Array1<f64>>> = (0..Field::max()).map(|_| None).collect();
    for (field, col) in schema.fields().filter(|(f, _)| *f != Field::Time) {
        let raw = column(rows, field, col)?;
        let values = match field.transform() {
            Transform::Identity => raw,
            Transform::Decibel => Decibel.process(raw.view()).map_err(|source| {
                let DecibelError::NonPositive { index, .. } = source;
                ExtractError::Domain {
                    field,
                    line: rows[index].line(),
                    source,
                }
            })?,
        };
        columns[usize::from(field)] = Some(values);
    }
    Ok(SeriesSet { time, columns })
}
