use super::format::FormatConfig;
use crate::datasource::Field;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EnsembleConfig {
    /// Glob selecting one statistics file per repeated run,
    /// e.g. "noop*/DlRsrp*".
    pub pattern: String,

    /// Quantity to aggregate across runs.
    /// Default: sinr
    #[serde(default = "default_field")]
    pub field: Field,

    /// Draw an error bar on every n-th sample.
    /// Default: 100
    #[serde(default = "default_error_every")]
    pub error_every: usize,

    /// Column layout of every run file.
    #[serde(default = "FormatConfig::link_quality_stats")]
    pub format: FormatConfig,
}

fn default_field() -> Field {
    Field::Sinr
}

fn default_error_every() -> usize {
    100
}
