use crate::datasource::{
    ColumnSchema, Delimiter, Field, MalformedRowPolicy, RecordParser, TimeUnit,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Layout of one kind of delimited measurement file.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    /// Field separator.
    #[serde(default)]
    pub delimiter: Delimiter,

    /// Lines skipped before the body. They are never inspected.
    /// Default: 1
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,

    /// Whether unparsable body lines abort the read or are dropped.
    #[serde(default)]
    pub malformed_rows: MalformedRowPolicy,

    /// If set, every body line must have exactly this many fields.
    pub expected_columns: Option<usize>,

    /// Unit of the time column.
    #[serde(default)]
    pub time_unit: TimeUnit,

    /// Semantic field to column index.
    pub columns: BTreeMap<Field, usize>,
}

fn default_header_lines() -> usize {
    1
}

impl FormatConfig {
    /// Tab separated `DlRsrpSinrStats.txt` layout:
    /// time, cellId, IMSI, RNTI, rsrp, sinr.
    pub fn link_quality_stats() -> Self {
        FormatConfig {
            delimiter: Delimiter::Tab,
            header_lines: 1,
            malformed_rows: MalformedRowPolicy::Fail,
            expected_columns: None,
            time_unit: TimeUnit::Seconds,
            columns: BTreeMap::from([
                (Field::Time, 0),
                (Field::CellId, 1),
                (Field::Rsrp, 4),
                (Field::Sinr, 5),
            ]),
        }
    }

    /// Whitespace separated `throughput.out` layout. Every line is read;
    /// a header or summary line simply fails to parse and is dropped.
    pub fn throughput_log() -> Self {
        FormatConfig {
            delimiter: Delimiter::Whitespace,
            header_lines: 0,
            malformed_rows: MalformedRowPolicy::Skip,
            expected_columns: None,
            time_unit: TimeUnit::Seconds,
            columns: BTreeMap::from([(Field::Time, 0), (Field::Throughput, 3)]),
        }
    }

    pub fn schema(&self) -> ColumnSchema {
        ColumnSchema::from(&self.columns)
    }

    pub fn parser(&self) -> RecordParser {
        RecordParser::new(self.delimiter)
            .header_lines(self.header_lines)
            .policy(self.malformed_rows)
            .expected_columns(self.expected_columns)
            .schema(&self.schema())
    }
}
