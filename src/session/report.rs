use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

use crate::analysis::{EnsembleSummary, Overlay};
use crate::signal::HandoverEvent;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("no such product: {0:?}")]
    NoSuchProduct(String),
}

/// The data products handed to a plotting front end.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    CellId,
    Sinr,
    Rsrp,
    Throughput,
    Ensemble,
}

impl FromStr for Product {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let res = match s {
            "cellid" => Product::CellId,
            "sinr" => Product::Sinr,
            "rsrp" => Product::Rsrp,
            "throughput" => Product::Throughput,
            "ensemble" => Product::Ensemble,
            _ => return Err(ProductError::NoSuchProduct(s.to_owned())),
        };
        Ok(res)
    }
}

/// One plot's worth of aligned numbers plus the hints needed to draw it.
#[derive(Debug, Clone, Serialize)]
pub struct PlotProduct {
    pub product: Product,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
    /// Seconds.
    pub time: Vec<f64>,
    pub values: Vec<f64>,
    /// Symmetric error around `values`, ensemble only.
    pub spread: Option<Vec<f64>>,
    /// Show every n-th error bar.
    pub error_every: Option<usize>,
    /// Vertical handover lines, seconds.
    pub markers: Vec<f64>,
}

impl PlotProduct {
    pub fn from_overlay(product: Product, title: &str, y_label: &str, overlay: &Overlay) -> Self {
        PlotProduct {
            product,
            title: title.to_owned(),
            x_label: String::from("Time (s)"),
            y_label: y_label.to_owned(),
            x_limits: None,
            y_limits: None,
            time: overlay.series.timestamps().to_vec(),
            values: overlay.series.values().to_vec(),
            spread: None,
            error_every: None,
            markers: overlay.markers.clone(),
        }
    }

    pub fn from_ensemble(summary: &EnsembleSummary, y_label: &str, error_every: usize) -> Self {
        PlotProduct {
            product: Product::Ensemble,
            title: format!("{} over {} runs", summary.field, summary.members.len()),
            x_label: String::from("Time (s)"),
            y_label: y_label.to_owned(),
            x_limits: None,
            y_limits: None,
            time: summary.time.to_vec(),
            values: summary.mean.to_vec(),
            spread: Some(summary.std_dev.to_vec()),
            error_every: Some(error_every),
            markers: Vec::new(),
        }
    }

    pub fn x_limits(mut self, limits: Option<(f64, f64)>) -> Self {
        self.x_limits = limits;
        self
    }

    pub fn y_limits(mut self, limits: Option<(f64, f64)>) -> Self {
        self.y_limits = limits;
        self
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub handovers: Vec<HandoverEvent>,
    pub products: Vec<PlotProduct>,
}

impl AnalysisReport {
    pub fn product(&self, product: Product) -> Option<&PlotProduct> {
        self.products.iter().find(|p| p.product == product)
    }
}
