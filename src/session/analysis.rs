use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::report::{AnalysisReport, PlotProduct, Product};
use crate::analysis::{overlay, EnsembleAggregator, EnsembleError};
use crate::config::{Config, FormatConfig};
use crate::datasource::{Field, RecordError};
use crate::series::{extract, ExtractError, SeriesSet, TimeSeries};
use crate::signal::{HandoverDetector, HandoverEvent};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unable to read input")]
    Record(#[from] RecordError),
    #[error("unable to extract series from {}", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
    #[error("{} has no {field} column", path.display())]
    MissingField { path: PathBuf, field: Field },
    #[error("ensemble aggregation failed")]
    Ensemble(#[from] EnsembleError),
}

/// One batch analysis over the files named by a configuration. Relative
/// paths are resolved against `base_dir`.
pub struct AnalysisSession<'a> {
    config: &'a Config,
    base_dir: PathBuf,
}

impl<'a> AnalysisSession<'a> {
    pub fn new(config: &'a Config, base_dir: &Path) -> Self {
        Self {
            config,
            base_dir: base_dir.to_owned(),
        }
    }

    pub fn run(&self) -> Result<AnalysisReport, SessionError> {
        let lq = &self.config.link_quality;
        let lq_path = self.base_dir.join(&lq.path);
        let stats = load(&lq_path, &lq.format)?;
        let unit = lq.format.time_unit;

        let cells = series(&stats, Field::CellId, &lq_path)?;
        let handovers = HandoverDetector::builder()
            .initial_cell(self.config.handover.initial_cell)
            .build()
            .detect(&cells);
        info!(
            "{} handovers over {} samples in {}",
            handovers.len(),
            cells.len(),
            lq_path.display()
        );

        let view = &self.config.view;
        let mut products = Vec::new();
        if let Some(tput) = self.throughput(&handovers)? {
            products.push(tput);
        }
        products.push(
            PlotProduct::from_overlay(
                Product::CellId,
                "Serving cell",
                "Connected Cell",
                &overlay(&handovers, unit, &cells, unit),
            )
            .x_limits(view.time_limits)
            .y_limits(view.cell_limits),
        );
        for (product, field, title, y_label) in [
            (Product::Sinr, Field::Sinr, "SINR", "SINR (dB)"),
            (Product::Rsrp, Field::Rsrp, "RSRP", "Received Power (dBm)"),
        ] {
            let s = series(&stats, field, &lq_path)?;
            products.push(
                PlotProduct::from_overlay(product, title, y_label, &overlay(&handovers, unit, &s, unit))
                    .x_limits(view.time_limits),
            );
        }
        if let Some(ensemble) = self.config.ensemble.as_ref() {
            let summary = EnsembleAggregator::from_config(ensemble).run(&self.base_dir)?;
            let y_label = match summary.field {
                Field::Sinr => "SINR (dB)",
                Field::Rsrp => "Received Power (dBm)",
                Field::Throughput => "Throughput Mbps",
                Field::CellId => "Connected Cell",
                Field::Time => "Time",
            };
            products.push(PlotProduct::from_ensemble(&summary, y_label, ensemble.error_every));
        }

        Ok(AnalysisReport {
            handovers,
            products,
        })
    }

    // Throughput plot with the link-quality handovers laid over it.
    fn throughput(&self, handovers: &[HandoverEvent]) -> Result<Option<PlotProduct>, SessionError> {
        let tp = &self.config.throughput;
        let Some(path) = tp.path.as_ref() else {
            return Ok(None);
        };
        let path = self.base_dir.join(path);
        let set = load(&path, &tp.format)?;
        let s = series(&set, Field::Throughput, &path)?;
        info!("{} throughput samples in {}", s.len(), path.display());
        let view = overlay(
            handovers,
            self.config.link_quality.format.time_unit,
            &s,
            tp.format.time_unit,
        );
        Ok(Some(PlotProduct::from_overlay(
            Product::Throughput,
            "Throughput",
            "Throughput Mbps",
            &view,
        )))
    }
}

fn load(path: &Path, format: &FormatConfig) -> Result<SeriesSet, SessionError> {
    let rows = format.parser().read_path(path)?;
    extract(&rows, &format.schema()).map_err(|source| SessionError::Extract {
        path: path.to_owned(),
        source,
    })
}

fn series(set: &SeriesSet, field: Field, path: &Path) -> Result<TimeSeries, SessionError> {
    set.series(field).ok_or_else(|| SessionError::MissingField {
        path: path.to_owned(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnsembleConfig;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "handover-trace-session-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("scratch dir");
        dir
    }

    const STATS: &str = "% time\tcellId\tIMSI\tRNTI\trsrp\tsinr\n\
                         0\t1\t1\t1\t1.0\t1.0\n\
                         1\t1\t1\t1\t1.0\t1.0\n\
                         2\t2\t1\t1\t1.0\t1.0\n";

    #[test]
    fn default_run() {
        let dir = scratch("default");
        fs::write(dir.join("DlRsrpSinrStats.txt"), STATS).expect("write");
        fs::write(
            dir.join("throughput.out"),
            "0 a b 5.0\n1 a b 7.5\ngarbled line\n",
        )
        .expect("write");

        let config = Config::default();
        let report = AnalysisSession::new(&config, &dir).run().expect("run");
        let times: Vec<f64> = report.handovers.iter().map(|e| e.time).collect();
        assert_eq!(times, vec![2.0]);

        let cell = report.product(Product::CellId).expect("cell plot");
        assert_eq!(cell.values, vec![1.0, 1.0, 2.0]);
        assert_eq!(cell.y_limits, Some((0.5, 4.5)));
        let sinr = report.product(Product::Sinr).expect("sinr plot");
        assert_eq!(sinr.values, vec![0.0, 0.0, 0.0]);
        assert_eq!(sinr.markers, vec![2.0]);
        let tput = report.product(Product::Throughput).expect("throughput plot");
        assert_eq!(tput.time, vec![0.0, 1.0]);
        assert_eq!(tput.values, vec![5.0, 7.5]);
        assert_eq!(tput.markers, vec![2.0]);
        assert!(report.product(Product::Ensemble).is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_stats_file_fails() {
        let dir = scratch("missing");
        let config = Config::default();
        let err = AnalysisSession::new(&config, &dir).run().expect_err("missing");
        assert!(matches!(
            err,
            SessionError::Record(RecordError::FileOpen { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn runs_without_throughput_and_with_ensemble() {
        let dir = scratch("ensemble");
        fs::write(dir.join("DlRsrpSinrStats.txt"), STATS).expect("write");
        for run in ["noop1", "noop2"] {
            fs::create_dir_all(dir.join(run)).expect("run dir");
            fs::write(dir.join(run).join("DlRsrpSinrStats.txt"), STATS).expect("write");
        }
        let mut config = Config::default();
        config.throughput.path = None;
        config.ensemble = Some(EnsembleConfig {
            pattern: String::from("noop*/DlRsrp*"),
            field: Field::Sinr,
            error_every: 100,
            format: FormatConfig::link_quality_stats(),
        });
        let report = AnalysisSession::new(&config, &dir).run().expect("run");
        assert!(report.product(Product::Throughput).is_none());
        let ensemble = report.product(Product::Ensemble).expect("ensemble");
        assert_eq!(ensemble.time, vec![0.0, 1.0, 2.0]);
        assert_eq!(ensemble.spread, Some(vec![0.0, 0.0, 0.0]));
        assert_eq!(ensemble.error_every, Some(100));
        let _ = fs::remove_dir_all(&dir);
    }
}
