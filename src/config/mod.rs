mod ensemble;
mod format;
mod handover;
mod root;
mod source;
mod view;

pub use ensemble::EnsembleConfig;
pub use format::FormatConfig;
pub use handover::HandoverConfig;
pub use root::{Config, ConfigurationError};
pub use source::{LinkQualitySourceConfig, ThroughputSourceConfig};
pub use view::ViewConfig;
