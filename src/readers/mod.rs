pub mod report_reader;

pub use report_reader::ReportReader;
