/// One body line of a delimited file, addressed by column index. Only
/// columns the parser was asked to consume hold a value.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    line: usize,
    fields: Vec<Option<f64>>,
}

impl MeasurementRow {
    pub fn new(line: usize, width: usize) -> Self {
        Self {
            line,
            fields: vec![None; width],
        }
    }

    pub(crate) fn set(&mut self, column: usize, v: f64) {
        self.fields[column] = Some(v);
    }

    /// 1-based line number in the source file.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Number of fields the line was split into.
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, column: usize) -> Option<f64> {
        self.fields.get(column).copied().flatten()
    }
}
