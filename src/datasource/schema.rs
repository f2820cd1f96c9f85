use super::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How fields are separated on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Exactly one tab between fields; empty fields are kept.
    #[default]
    Tab,
    /// Any run of ASCII whitespace.
    Whitespace,
}

impl Delimiter {
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Tab => line.split('\t').collect(),
            Delimiter::Whitespace => line.split_ascii_whitespace().collect(),
        }
    }
}

/// What to do with a body line whose consumed fields don't parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRowPolicy {
    /// Abort reading the file.
    #[default]
    Fail,
    /// Drop the line and keep going (known trailer/summary lines).
    Skip,
}

/// The unit a format writes its time column in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    /// Factor that converts a value in this unit into seconds.
    pub const fn seconds_per_unit(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Milliseconds => 1.0e-3,
        }
    }
}

/// Maps semantic fields onto positional column indices for one file format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    slots: Vec<Option<usize>>,
}

impl ColumnSchema {
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(Field::max());
        slots.extend((0..Field::max()).map(|_| None));
        ColumnSchema { slots }
    }

    pub fn with(mut self, field: Field, column: usize) -> Self {
        self.slots[usize::from(field)] = Some(column);
        self
    }

    pub fn column(&self, field: Field) -> Option<usize> {
        self.slots[usize::from(field)]
    }

    /// Mapped fields, in field order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        [
            Field::Time,
            Field::CellId,
            Field::Rsrp,
            Field::Sinr,
            Field::Throughput,
        ]
        .into_iter()
        .filter_map(|f| self.column(f).map(|c| (f, c)))
    }

    /// Distinct column indices that must parse as numbers, ascending.
    pub fn consumed_columns(&self) -> Vec<usize> {
        let mut cols: Vec<usize> = self.fields().map(|(_, c)| c).collect();
        cols.sort_unstable();
        cols.dedup();
        cols
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&BTreeMap<Field, usize>> for ColumnSchema {
    fn from(value: &BTreeMap<Field, usize>) -> Self {
        value
            .iter()
            .fold(ColumnSchema::new(), |schema, (&field, &column)| {
                schema.with(field, column)
            })
    }
}
