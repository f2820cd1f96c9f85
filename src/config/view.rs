use serde::Deserialize;

/// Axis hints forwarded to whatever draws the report.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Time axis range in seconds for the link-quality plots.
    /// Default: [0, 150]
    #[serde(default = "default_time_limits")]
    pub time_limits: Option<(f64, f64)>,

    /// Vertical range of the serving-cell plot.
    /// Default: [0.5, 4.5]
    #[serde(default = "default_cell_limits")]
    pub cell_limits: Option<(f64, f64)>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            time_limits: default_time_limits(),
            cell_limits: default_cell_limits(),
        }
    }
}

fn default_time_limits() -> Option<(f64, f64)> {
    Some((0.0, 150.0))
}

fn default_cell_limits() -> Option<(f64, f64)> {
    Some((0.5, 4.5))
}
