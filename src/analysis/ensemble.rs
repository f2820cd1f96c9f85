use log::{debug, info, warn};
use ndarray::{Array1, Array2, Axis};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{EnsembleConfig, FormatConfig};
use crate::datasource::{Field, RecordError};
use crate::series::{extract, ExtractError, SeriesSet};

#[derive(Error, Debug)]
pub enum EnsembleError {
    #[error("bad ensemble pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("unable to list ensemble members")]
    Glob(#[from] glob::GlobError),
    #[error("no files match {0:?}")]
    NoMatches(String),
    #[error("unable to read ensemble member")]
    Record(#[from] RecordError),
    #[error("unable to extract series from {}", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
    #[error("{} has no {field} column", path.display())]
    MissingField { path: PathBuf, field: Field },
    #[error("{} has {found} samples, {expected} expected", path.display())]
    ShapeMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// One parsed run of the ensemble.
pub struct EnsembleMember {
    pub path: PathBuf,
    pub series: SeriesSet,
}

/// Per-sample statistics across runs.
#[derive(Debug, Clone)]
pub struct EnsembleSummary {
    pub field: Field,
    /// Every run, in sorted path order.
    pub members: Vec<PathBuf>,
    /// The run whose time column is used as the shared axis: the first in
    /// sorted order.
    pub reference: PathBuf,
    pub time: Array1<f64>,
    pub mean: Array1<f64>,
    /// Population standard deviation (no degrees-of-freedom correction).
    pub std_dev: Array1<f64>,
}

/// Finds, parses and aggregates repeated-run files.
pub struct EnsembleAggregator {
    pattern: String,
    field: Field,
    format: FormatConfig,
}

impl EnsembleAggregator {
    pub fn new(pattern: &str, field: Field, format: FormatConfig) -> Self {
        Self {
            pattern: pattern.to_owned(),
            field,
            format,
        }
    }

    pub fn from_config(config: &EnsembleConfig) -> Self {
        Self::new(&config.pattern, config.field, config.format.clone())
    }

    /// Paths matching the pattern below `base_dir`, sorted.
    pub fn matches(&self, base_dir: &Path) -> Result<Vec<PathBuf>, EnsembleError> {
        // The directory is literal; only `self.pattern` is glob syntax.
        let dir = glob::Pattern::escape(&base_dir.to_string_lossy());
        let full = Path::new(&dir).join(&self.pattern);
        let pattern = full.to_string_lossy();
        let mut paths = glob::glob(&pattern)
            .map_err(|source| EnsembleError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?
            .collect::<Result<Vec<PathBuf>, glob::GlobError>>()?;
        paths.retain(|p| p.is_file());
        paths.sort();
        if paths.is_empty() {
            return Err(EnsembleError::NoMatches(pattern.to_string()));
        }
        Ok(paths)
    }

    pub fn run(&self, base_dir: &Path) -> Result<EnsembleSummary, EnsembleError> {
        let paths = self.matches(base_dir)?;
        info!("aggregating {} over {} runs", self.field, paths.len());
        let parser = self.format.parser();
        let schema = self.format.schema();
        let members = paths
            .into_iter()
            .map(|path| {
                let rows = parser.read_path(&path)?;
                let series = extract(&rows, &schema).map_err(|source| EnsembleError::Extract {
                    path: path.clone(),
                    source,
                })?;
                Ok(EnsembleMember { path, series })
            })
            .collect::<Result<Vec<EnsembleMember>, EnsembleError>>()?;
        aggregate(&members, self.field)
    }
}

/// Stack `field` from every member into a runs x samples matrix and reduce
/// over runs. All members must have the reference run's sample count.
pub fn aggregate(members: &[EnsembleMember], field: Field) -> Result<EnsembleSummary, EnsembleError> {
    let reference = members
        .first()
        .ok_or_else(|| EnsembleError::NoMatches(String::from("<empty ensemble>")))?;
    let n = reference.series.len();

    let mut stacked = Array2::<f64>::zeros((members.len(), n));
    for (mut row, member) in stacked.axis_iter_mut(Axis(0)).zip(members) {
        let values = member
            .series
            .values(field)
            .ok_or_else(|| EnsembleError::MissingField {
                path: member.path.clone(),
                field,
            })?;
        if values.len() != n {
            return Err(EnsembleError::ShapeMismatch {
                path: member.path.clone(),
                expected: n,
                found: values.len(),
            });
        }
        if member.series.time() != reference.series.time() {
            warn!(
                "{} is not sampled like {}; using the latter's time axis",
                member.path.display(),
                reference.path.display()
            );
        }
        row.assign(values);
        debug!("stacked {}", member.path.display());
    }

    let mean = stacked
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(n));
    let std_dev = stacked.std_axis(Axis(0), 0.0);
    Ok(EnsembleSummary {
        field,
        members: members.iter().map(|m| m.path.clone()).collect(),
        reference: reference.path.clone(),
        time: reference.series.time().clone(),
        mean,
        std_dev,
    })
}
