pub mod combiner;
pub mod integrity_checker;
pub mod joiner;
pub mod line_merger;
pub mod tokenizer;

pub use combiner::{combine, CombineError};
pub use integrity_checker::{IntegrityChecker, IntegrityReport, LabelMismatch};
pub use joiner::join;
pub use line_merger::{LineMerger, MergedLine};
pub use tokenizer::tokenize;
