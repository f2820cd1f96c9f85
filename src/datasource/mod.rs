mod field;
mod record;
mod schema;
mod txtfile;

pub use field::{Field, FieldError, Transform};
pub use record::MeasurementRow;
pub use schema::{ColumnSchema, Delimiter, MalformedRowPolicy, TimeUnit};
pub use txtfile::{RecordError, RecordParser};
