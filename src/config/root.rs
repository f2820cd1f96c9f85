use super::ensemble::EnsembleConfig;
use super::handover::HandoverConfig;
use super::source::{LinkQualitySourceConfig, ThroughputSourceConfig};
use super::view::ViewConfig;

use config::{ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("configuration error")]
    ParseError(#[from] ConfigError),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// RSRP/SINR statistics input.
    #[serde(default)]
    pub link_quality: LinkQualitySourceConfig,

    /// Throughput log input.
    #[serde(default)]
    pub throughput: ThroughputSourceConfig,

    /// Repeated-run aggregation. Skipped when absent.
    pub ensemble: Option<EnsembleConfig>,

    /// Handover detection settings.
    #[serde(default)]
    pub handover: HandoverConfig,

    /// Presentation hints.
    #[serde(default)]
    pub view: ViewConfig,
}

impl Config {
    /// Layer an optional JSON file and then `<env_prefix><sep>...`
    /// environment variables over the built-in defaults.
    pub fn new(
        path: Option<&Path>,
        env_prefix: &str,
        env_separator: &str,
    ) -> Result<Self, ConfigurationError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Json));
        }
        builder
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator(env_separator)
                    .separator(env_separator)
                    .try_parsing(true),
            )
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::{Delimiter, Field};

    #[test]
    fn it_decodes_empty() {
        let c: Config = serde_json::from_str("{}").expect("parse");
        assert_eq!(c.link_quality.path, Path::new("DlRsrpSinrStats.txt"));
        assert_eq!(
            c.throughput.path.as_deref(),
            Some(Path::new("throughput.out"))
        );
        assert_eq!(c.throughput.format.delimiter, Delimiter::Whitespace);
        assert!(c.ensemble.is_none());
        assert!(c.handover.initial_cell.is_none());
        assert_eq!(c.view.time_limits, Some((0.0, 150.0)));
    }

    #[test]
    fn it_decodes_ensemble() {
        let c: Config =
            serde_json::from_str("{\"ensemble\": {\"pattern\": \"noop*/DlRsrp*\"}}").expect("parse");
        let e = c.ensemble.expect("ensemble");
        assert_eq!(e.field, Field::Sinr);
        assert_eq!(e.error_every, 100);
    }

    #[test]
    fn it_disables_throughput() {
        let c: Config =
            serde_json::from_str("{\"throughput\": {\"path\": null}}").expect("parse");
        assert!(c.throughput.path.is_none());
    }

    #[test]
    fn it_builds_without_file() {
        let c = Config::new(None, "HOTRACE_TEST_UNSET", "__").expect("defaults");
        assert_eq!(c.link_quality.format.header_lines, 1);
    }
}
