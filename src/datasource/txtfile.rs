use log::{debug, warn};
use std::{
    fs::File,
    io::{self, BufRead},
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::record::MeasurementRow;
use super::schema::{ColumnSchema, Delimiter, MalformedRowPolicy};

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("unable to open {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("bad line read in {}", path.display())]
    LineRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: column {column} missing, line has {found} fields", path.display())]
    MissingField {
        path: PathBuf,
        line: usize,
        column: usize,
        found: usize,
    },
    #[error("{}:{line}: column {column} is not a number: {text:?}", path.display())]
    UnparsableField {
        path: PathBuf,
        line: usize,
        column: usize,
        text: String,
    },
    #[error("{}:{line}: expected {expected} columns, got {found}", path.display())]
    ColumnCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl RecordError {
    /// Errors caused by the content of one line rather than by I/O.
    pub fn is_row_local(&self) -> bool {
        matches!(
            self,
            RecordError::MissingField { .. }
                | RecordError::UnparsableField { .. }
                | RecordError::ColumnCount { .. }
        )
    }
}

/// Reads a delimited text file with leading header lines into positional
/// numeric rows. Only the consumed columns are parsed.
#[derive(Debug, Clone)]
pub struct RecordParser {
    delimiter: Delimiter,
    header_lines: usize,
    policy: MalformedRowPolicy,
    expected_columns: Option<usize>,
    consumed: Vec<usize>,
}

impl RecordParser {
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            header_lines: 1,
            policy: MalformedRowPolicy::Fail,
            expected_columns: None,
            consumed: Vec::new(),
        }
    }

    /// Number of lines skipped, unread, before the body.
    pub fn header_lines(mut self, n: usize) -> Self {
        self.header_lines = n;
        self
    }

    pub fn policy(mut self, policy: MalformedRowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Require every body line to have exactly this many fields.
    pub fn expected_columns(mut self, n: Option<usize>) -> Self {
        self.expected_columns = n;
        self
    }

    /// Parse the columns a schema maps.
    pub fn schema(mut self, schema: &ColumnSchema) -> Self {
        self.consumed = schema.consumed_columns();
        self
    }

    pub fn read_path(&self, path: &Path) -> Result<Vec<MeasurementRow>, RecordError> {
        let f = File::open(path).map_err(|source| RecordError::FileOpen {
            path: path.to_owned(),
            source,
        })?;
        let rows = self.read(io::BufReader::new(f), path)?;
        debug!("read {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// Parse rows from any buffered reader. `source` only names the input
    /// in diagnostics.
    pub fn read<R: BufRead>(
        &self,
        reader: R,
        source: &Path,
    ) -> Result<Vec<MeasurementRow>, RecordError> {
        let mut rows = Vec::new();
        for (idx, line) in reader.lines().enumerate().skip(self.header_lines) {
            let line = line.map_err(|source_err| RecordError::LineRead {
                path: source.to_owned(),
                source: source_err,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            match self.parse_line(&line, idx + 1, source) {
                Ok(row) => rows.push(row),
                Err(e) if e.is_row_local() && self.policy == MalformedRowPolicy::Skip => {
                    warn!("skipping line: {e}");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(rows)
    }

    fn parse_line(
        &self,
        line: &str,
        line_no: usize,
        source: &Path,
    ) -> Result<MeasurementRow, RecordError> {
        let parts = self.delimiter.split(line.trim_end_matches(['\r', '\n']));
        if let Some(expected) = self.expected_columns {
            if parts.len() != expected {
                return Err(RecordError::ColumnCount {
                    path: source.to_owned(),
                    line: line_no,
                    expected,
                    found: parts.len(),
                });
            }
        }
        let mut row = MeasurementRow::new(line_no, parts.len());
        for &column in self.consumed.iter() {
            let text = parts.get(column).ok_or_else(|| RecordError::MissingField {
                path: source.to_owned(),
                line: line_no,
                column,
                found: parts.len(),
            })?;
            let v = text
                .trim()
                .parse::<f64>()
                .map_err(|_| RecordError::UnparsableField {
                    path: source.to_owned(),
                    line: line_no,
                    column,
                    text: (*text).to_owned(),
                })?;
            row.set(column, v);
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::Field;
    use std::io::Cursor;

    fn throughput_parser() -> RecordParser {
        let schema = ColumnSchema::new()
            .with(Field::Time, 0)
            .with(Field::Throughput, 3);
        RecordParser::new(Delimiter::Whitespace)
            .header_lines(0)
            .policy(MalformedRowPolicy::Skip)
            .schema(&schema)
    }

    fn stats_parser() -> RecordParser {
        let schema = ColumnSchema::new()
            .with(Field::Time, 0)
            .with(Field::CellId, 1)
            .with(Field::Rsrp, 4)
            .with(Field::Sinr, 5);
        RecordParser::new(Delimiter::Tab).schema(&schema)
    }

    #[test]
    fn skips_header_and_parses_consumed_columns() {
        let text = "% time\tcellId\tIMSI\tRNTI\trsrp\tsinr\n\
                    0.1\t1\t1\t1\t2.5\t3.5\n\
                    0.2\t2\t1\t1\t2.0\t3.0\n";
        let rows = stats_parser()
            .read(Cursor::new(text), Path::new("stats"))
            .expect("parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line(), 2);
        assert_eq!(rows[0].get(0), Some(0.1));
        assert_eq!(rows[1].get(1), Some(2.0));
        assert_eq!(rows[1].get(5), Some(3.0));
        assert_eq!(rows[1].get(2), None);
        assert_eq!(rows[1].width(), 6);
    }

    #[test]
    fn tolerates_throughput_trailer_lines() {
        let text = "0 a b 5.0\n1 a b 7.5\ngarbled line\n";
        let rows = throughput_parser()
            .read(Cursor::new(text), Path::new("throughput.out"))
            .expect("parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(3), Some(5.0));
        assert_eq!(rows[1].get(0), Some(1.0));
    }

    #[test]
    fn strict_format_fails_with_line_and_column() {
        let text = "header\n0\t1\t1\t1\t1.0\t1.0\n1\tx\t1\t1\t1.0\t1.0\n";
        let err = stats_parser()
            .read(Cursor::new(text), Path::new("stats"))
            .expect_err("should fail");
        match err {
            RecordError::UnparsableField { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, 1);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn strict_format_fails_on_short_line() {
        let text = "header\n0\t1\t1\n";
        let err = stats_parser()
            .read(Cursor::new(text), Path::new("stats"))
            .expect_err("should fail");
        assert!(matches!(err, RecordError::MissingField { found: 3, .. }));
    }

    #[test]
    fn column_count_is_checked_when_declared() {
        let text = "header\n0\t1\t1\t1\t1.0\t1.0\t9\n";
        let err = stats_parser()
            .expected_columns(Some(6))
            .read(Cursor::new(text), Path::new("stats"))
            .expect_err("should fail");
        assert!(matches!(
            err,
            RecordError::ColumnCount {
                expected: 6,
                found: 7,
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = stats_parser()
            .read_path(Path::new("/nonexistent/DlRsrpSinrStats.txt"))
            .expect_err("missing");
        assert!(matches!(err, RecordError::FileOpen { .. }));
        assert!(!err.is_row_local());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "header\n0\t1\t1\t1\t1.0\t1.0\n\n";
        let rows = stats_parser()
            .read(Cursor::new(text), Path::new("stats"))
            .expect("parse");
        assert_eq!(rows.len(), 1);
    }
}
