use super::format::FormatConfig;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct LinkQualitySourceConfig {
    /// RSRP/SINR statistics file.
    /// Default: DlRsrpSinrStats.txt
    #[serde(default = "default_link_quality_path")]
    pub path: PathBuf,

    /// Column layout of the statistics file.
    #[serde(default = "FormatConfig::link_quality_stats")]
    pub format: FormatConfig,
}

impl Default for LinkQualitySourceConfig {
    fn default() -> Self {
        Self {
            path: default_link_quality_path(),
            format: FormatConfig::link_quality_stats(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThroughputSourceConfig {
    /// Throughput log. If null, no throughput product is produced.
    /// Default: throughput.out
    #[serde(default = "default_throughput_path")]
    pub path: Option<PathBuf>,

    /// Column layout of the throughput log.
    #[serde(default = "FormatConfig::throughput_log")]
    pub format: FormatConfig,
}

impl Default for ThroughputSourceConfig {
    fn default() -> Self {
        Self {
            path: default_throughput_path(),
            format: FormatConfig::throughput_log(),
        }
    }
}

fn default_link_quality_path() -> PathBuf {
    PathBuf::from("DlRsrpSinrStats.txt")
}

fn default_throughput_path() -> Option<PathBuf> {
    Some(PathBuf::from("throughput.out"))
}
