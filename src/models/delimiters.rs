use crate::error::{ProcessingError, Result};
use crate::utils::constants::{INPUT_DELIMITERS, OUTPUT_DELIMITERS};

/// Ordered delimiters, most significant level first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    levels: Vec<String>,
}

impl DelimiterSet {
    pub fn new<I, S>(levels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let levels: Vec<String> = levels.into_iter().map(Into::into).collect();

        if levels.is_empty() {
            return Err(ProcessingError::Config(
                "Delimiter sequence must have at least one level".to_string(),
            ));
        }
        if let Some(pos) = levels.iter().position(String::is_empty) {
            return Err(ProcessingError::Config(format!(
                "Delimiter at level {} is empty",
                pos
            )));
        }

        Ok(Self { levels })
    }

    /// Delimiters used to split `bench_two` output lines.
    pub fn input() -> Self {
        Self::from_static(&INPUT_DELIMITERS)
    }

    /// Delimiters used to write merged lines.
    pub fn output() -> Self {
        Self::from_static(&OUTPUT_DELIMITERS)
    }

    fn from_static(levels: &[&str]) -> Self {
        Self {
            levels: levels.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }
}
