use crate::error::{ProcessingError, Result};
use crate::models::{DelimiterSet, Number, ReportFile, TokenTree};
use crate::processors::{combine, join, tokenize, CombineError};
use crate::utils::constants::LABEL_MISMATCH_WARNING;
use tracing::{trace, warn};

/// One merged output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedLine {
    pub text: String,
    /// Indexes of the reports whose label did not match the first report's.
    /// Their values were left out of this line.
    pub label_mismatches: Vec<usize>,
}

/// Folds the same line of every report into one, keeping the minimum value
/// at each field position.
pub struct LineMerger {
    input_delimiters: DelimiterSet,
    output_delimiters: DelimiterSet,
}

impl LineMerger {
    pub fn new() -> Self {
        Self {
            input_delimiters: DelimiterSet::input(),
            output_delimiters: DelimiterSet::output(),
        }
    }

    /// Use custom delimiters. Both sets must nest to the same depth so that
    /// the written line mirrors the parsed one.
    pub fn with_delimiters(input: DelimiterSet, output: DelimiterSet) -> Result<Self> {
        if input.depth() != output.depth() {
            return Err(ProcessingError::Config(format!(
                "Input delimiters have {} levels but output delimiters have {}",
                input.depth(),
                output.depth()
            )));
        }

        Ok(Self {
            input_delimiters: input,
            output_delimiters: output,
        })
    }

    /// Merge line `index` (zero-based) of every report.
    ///
    /// The first report seeds the result and owns the label. Later reports
    /// are folded in left to right; one whose label differs is reported and
    /// skipped for this line.
    pub fn merge_line(&self, reports: &[ReportFile], index: usize) -> Result<MergedLine> {
        let (first, rest) = reports.split_first().ok_or(ProcessingError::NoInputs)?;
        let line_number = index + 1;

        let mut total = self.tokenize_line(first, index)?;
        let mut label_mismatches = Vec::new();

        for (offset, report) in rest.iter().enumerate() {
            let tree = self.tokenize_line(report, index)?;

            match self.fold(&total, &tree) {
                Ok(Some(merged)) => total = merged,
                Ok(None) => {
                    warn!(
                        line = line_number,
                        path = %report.path.display(),
                        "{}",
                        LABEL_MISMATCH_WARNING
                    );
                    label_mismatches.push(offset + 1);
                }
                Err(CombineError::ShapeMismatch) => {
                    return Err(ProcessingError::ShapeMismatch {
                        line: line_number,
                        path: report.path.clone(),
                    });
                }
                Err(CombineError::InvalidNumber(value)) => {
                    return Err(ProcessingError::InvalidNumber {
                        line: line_number,
                        value,
                    });
                }
            }
        }

        let text = join(&total, self.output_delimiters.levels());
        trace!(line = line_number, %text, "Merged line");

        Ok(MergedLine {
            text,
            label_mismatches,
        })
    }

    /// Merge every line of `reports`, which must all have the same length.
    pub fn merge_reports(&self, reports: &[ReportFile]) -> Result<Vec<MergedLine>> {
        let line_count = reports.first().map_or(0, ReportFile::line_count);
        (0..line_count)
            .map(|index| self.merge_line(reports, index))
            .collect()
    }

    fn tokenize_line(&self, report: &ReportFile, index: usize) -> Result<TokenTree> {
        let line = report
            .line(index)
            .ok_or_else(|| ProcessingError::MissingLine {
                line: index + 1,
                path: report.path.clone(),
            })?;
        Ok(tokenize(line, self.input_delimiters.levels()))
    }

    /// Combine `next` into `total`. `Ok(None)` means the labels differ.
    fn fold(
        &self,
        total: &TokenTree,
        next: &TokenTree,
    ) -> std::result::Result<Option<TokenTree>, CombineError> {
        match (total, next) {
            // Lines without a value block are labels only
            (TokenTree::Leaf(a), TokenTree::Leaf(b)) => {
                Ok((a == b).then(|| total.clone()))
            }
            (TokenTree::Branch(acc), TokenTree::Branch(new)) if acc.len() == new.len() => {
                let (label, values) = acc.split_first().ok_or(CombineError::ShapeMismatch)?;
                if Some(label) != new.first() {
                    return Ok(None);
                }

                let mut merged = Vec::with_capacity(acc.len());
                merged.push(label.clone());
                for (a, b) in values.iter().zip(&new[1..]) {
                    merged.push(combine(a, b, &Number::minimum)?);
                }
                Ok(Some(TokenTree::Branch(merged)))
            }
            // A later report printed only the label where the first had values
            (TokenTree::Branch(_), TokenTree::Leaf(_)) => Ok(None),
            _ => Err(CombineError::ShapeMismatch),
        }
    }
}

impl Default for LineMerger {
    fn default() -> Self {
        Self::new()
    }
}
