use crate::session::{Product, ProductError};
use std::{path::PathBuf, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProductDumpError {
    #[error("dump spec missing product=path separator")]
    MissingPathSeparator,
    #[error("dump spec has an empty path")]
    EmptyPath,
    #[error("unknown product")]
    UnknownProduct(#[from] ProductError),
}

#[derive(Debug, Clone)]
/// A specification that pairs a data product with a text file, asking that
/// the product's columns be written there once the analysis completes.
pub struct ProductTiedPath {
    pub product: Product,
    pub path: PathBuf,
}

impl FromStr for ProductTiedPath {
    type Err = ProductDumpError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (product, path) = s
            .split_once('=')
            .ok_or(ProductDumpError::MissingPathSeparator)?;
        if path.is_empty() {
            return Err(ProductDumpError::EmptyPath);
        }
        Ok(Self {
            product: product.parse()?,
            path: path.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_one() {
        let spec = ProductTiedPath::from_str("sinr=/tmp/sinr.txt").expect("works");
        assert_eq!(spec.product, Product::Sinr);
        assert_eq!(spec.path, PathBuf::from("/tmp/sinr.txt"));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            ProductTiedPath::from_str("sinr"),
            Err(ProductDumpError::MissingPathSeparator)
        ));
        assert!(matches!(
            ProductTiedPath::from_str("sinr="),
            Err(ProductDumpError::EmptyPath)
        ));
        assert!(matches!(
            ProductTiedPath::from_str("rsrq=/tmp/x"),
            Err(ProductDumpError::UnknownProduct(_))
        ));
    }
}
