use crate::error::{ProcessingError, Result};
use crate::models::ReportFile;
use crate::processors::MergedLine;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub total_reports: usize,
    pub total_lines: usize,
    pub merged_lines: usize,
    pub label_mismatches: Vec<LabelMismatch>,
}

/// A report line whose label did not match the first report's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMismatch {
    pub line: usize,
    pub path: PathBuf,
}

impl IntegrityReport {
    /// Record the outcome of merging line `index` (zero-based).
    pub fn record_line(&mut self, index: usize, merged: &MergedLine, reports: &[ReportFile]) {
        self.merged_lines += 1;
        for &report_index in &merged.label_mismatches {
            if let Some(report) = reports.get(report_index) {
                self.label_mismatches.push(LabelMismatch {
                    line: index + 1,
                    path: report.path.clone(),
                });
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.label_mismatches.is_empty()
    }
}

pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check that every report has as many lines as the first one and start
    /// an [`IntegrityReport`] for the merge.
    pub fn check_reports(&self, reports: &[ReportFile]) -> Result<IntegrityReport> {
        let first = reports.first().ok_or(ProcessingError::NoInputs)?;
        let expected = first.line_count();

        for report in &reports[1..] {
            if report.line_count() != expected {
                return Err(ProcessingError::LineCountMismatch {
                    path: report.path.clone(),
                    reference: first.path.clone(),
                    expected,
                    found: report.line_count(),
                });
            }
        }

        Ok(IntegrityReport {
            total_reports: reports.len(),
            total_lines: expected,
            ..IntegrityReport::default()
        })
    }

    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let mut summary = format!(
            "Merged {} of {} lines from {} reports",
            report.merged_lines, report.total_lines, report.total_reports
        );

        if report.is_clean() {
            summary.push_str(", all labels matched");
        } else {
            summary.push_str(&format!(
                ", {} label mismatches:",
                report.label_mismatches.len()
            ));
            for mismatch in &report.label_mismatches {
                summary.push_str(&format!(
                    "\n  line {} of {}",
                    mismatch.line,
                    mismatch.path.display()
                ));
            }
        }

        summary
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}
