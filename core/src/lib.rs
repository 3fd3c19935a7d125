pub mod aggregate;
pub mod extract;
pub mod index;
pub mod normalize;
pub mod report;

pub use aggregate::{weigh_terms, WeightedTermMap};
pub use extract::{extract, Extraction, TagKind};
pub use index::{InvertedIndex, Posting};
pub use report::{write_report, AnalyticsSnapshot, ReportOptions};
