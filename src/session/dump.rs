use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use super::report::PlotProduct;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("unable to write dump file")]
    DumpFileError(#[from] std::io::Error),
    #[error("product has {time} timestamps but {values} values")]
    Unaligned { time: usize, values: usize },
}

/// Write one product as whitespace-separated columns, `time value` or
/// `time mean std`, preceded by one `# handover <t>` comment per marker.
pub fn dump_product(product: &PlotProduct, path: &Path) -> Result<(), DumpError> {
    let f = BufWriter::new(File::create(path)?);
    write_product(product, f)
}

pub fn write_product<W: Write>(product: &PlotProduct, mut w: W) -> Result<(), DumpError> {
    if product.time.len() != product.values.len() {
        return Err(DumpError::Unaligned {
            time: product.time.len(),
            values: product.values.len(),
        });
    }
    for m in product.markers.iter() {
        writeln!(w, "# handover {m}")?;
    }
    match product.spread.as_ref() {
        Some(spread) => {
            for ((t, v), s) in product.time.iter().zip(&product.values).zip(spread) {
                writeln!(w, "{t} {v} {s}")?;
            }
        }
        None => {
            for (t, v) in product.time.iter().zip(&product.values) {
                writeln!(w, "{t} {v}")?;
            }
        }
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::report::Product;

    fn product(spread: Option<Vec<f64>>) -> PlotProduct {
        PlotProduct {
            product: Product::Sinr,
            title: String::from("SINR"),
            x_label: String::from("Time (s)"),
            y_label: String::from("SINR (dB)"),
            x_limits: None,
            y_limits: None,
            time: vec![0.0, 0.5],
            values: vec![1.5, -3.0],
            spread,
            error_every: None,
            markers: vec![0.5],
        }
    }

    #[test]
    fn writes_two_columns() {
        let mut out = Vec::new();
        write_product(&product(None), &mut out).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "# handover 0.5\n0 1.5\n0.5 -3\n"
        );
    }

    #[test]
    fn writes_spread_column() {
        let mut out = Vec::new();
        write_product(&product(Some(vec![0.25, 1.0])), &mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.ends_with("0 1.5 0.25\n0.5 -3 1\n"));
    }

    #[test]
    fn rejects_unaligned() {
        let mut p = product(None);
        p.values.pop();
        assert!(matches!(
            write_product(&p, Vec::new()),
            Err(DumpError::Unaligned { time: 2, values: 1 })
        ));
    }
}
