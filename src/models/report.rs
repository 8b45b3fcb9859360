use std::path::{Path, PathBuf};

/// A benchmark report held fully in memory.
///
/// Lines keep their terminators, exactly as they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl ReportFile {
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Build a report from text already in memory.
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        Self::new(path, split_lines(content))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

/// Split text into lines, each keeping its trailing `\n` if it had one.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}
