mod analysis;
mod dump;
mod report;

pub use analysis::{AnalysisSession, SessionError};
pub use dump::{dump_product, write_product, DumpError};
pub use report::{AnalysisReport, PlotProduct, Product, ProductError};
