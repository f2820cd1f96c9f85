use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HandoverConfig {
    /// Serving cell assumed before the first sample. If unset, the first
    /// sample's cell is the starting state and never produces an event.
    pub initial_cell: Option<f64>,
}
