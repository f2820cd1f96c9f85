use serde::{Deserialize, Serialize};
use thiserror::Error;
use variant_count::VariantCount;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("no such field: {0:?}")]
    NoSuchField(String),
}

/// A semantic measurement quantity that a file format maps onto one of its
/// positional columns.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, VariantCount, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Time,
    CellId,
    Rsrp,
    Sinr,
    Throughput,
}

/// What happens to a raw column on its way into a series.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Transform {
    /// Value passes through unmodified.
    Identity,
    /// Linear power ratio converted with `10 * log10(x)`.
    Decibel,
}

impl Field {
    pub const fn max() -> usize {
        Field::VARIANT_COUNT
    }

    pub const fn transform(self) -> Transform {
        match self {
            Field::Rsrp | Field::Sinr => Transform::Decibel,
            Field::Time | Field::CellId | Field::Throughput => Transform::Identity,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Time => "time",
            Field::CellId => "cellid",
            Field::Rsrp => "rsrp",
            Field::Sinr => "sinr",
            Field::Throughput => "throughput",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Field> for usize {
    fn from(value: Field) -> Self {
        match value {
            Field::Time => 0,
            Field::CellId => 1,
            Field::Rsrp => 2,
            Field::Sinr => 3,
            Field::Throughput => 4,
        }
    }
}

impl TryFrom<&str> for Field {
    type Error = FieldError;

    /// Only works for lowercase inputs.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let res = match value {
            "time" => Self::Time,
            "cellid" => Self::CellId,
            "rsrp" => Self::Rsrp,
            "sinr" => Self::Sinr,
            "throughput" => Self::Throughput,
            _ => return Err(FieldError::NoSuchField(value.to_owned())),
        };
        Ok(res)
    }
}
