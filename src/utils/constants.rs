/// Delimiters splitting a `bench_two` result line, most significant first:
/// label from values, then the two levels of comma separated values
pub const INPUT_DELIMITERS: [&str; 3] = ["=>", ",", ","];

/// Delimiters used when writing merged lines
pub const OUTPUT_DELIMITERS: [&str; 3] = [" => ", ",", ","];

/// Diagnostic emitted when the same line differs between reports
pub const LABEL_MISMATCH_WARNING: &str = "Lines differ";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Always applied on top of the log filter so `Lines differ` cannot be hidden
pub const LABEL_MISMATCH_DIRECTIVE: &str = "bench_merge::processors::line_merger=warn";
