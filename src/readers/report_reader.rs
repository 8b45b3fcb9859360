use crate::error::{ProcessingError, Result};
use crate::models::report::split_lines;
use crate::models::ReportFile;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Loads whole benchmark reports into memory.
pub struct ReportReader {
    use_mmap: bool,
}

impl ReportReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    /// Read every report in order. The files are closed before this returns.
    pub fn read_all<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<ReportFile>> {
        if paths.is_empty() {
            return Err(ProcessingError::NoInputs);
        }

        paths.iter().map(|p| self.read_report(p.as_ref())).collect()
    }

    /// Read a single report, keeping line terminators
    pub fn read_report(&self, path: &Path) -> Result<ReportFile> {
        let lines = if self.use_mmap {
            self.read_lines_mmap(path)?
        } else {
            self.read_lines_buffered(path)?
        };

        debug!(path = %path.display(), lines = lines.len(), "Read report");
        Ok(ReportFile::new(path, lines))
    }

    fn read_lines_buffered(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut lines = Vec::new();

        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => break, // EOF
                Ok(_) => lines.push(line),
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    return Err(invalid_utf8(path, e));
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(lines)
    }

    /// Memory-mapped read for large reports
    fn read_lines_mmap(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path)?;
        // Zero-length files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(Vec::new());
        }

        let mmap = unsafe { Mmap::map(&file)? };
        let content = std::str::from_utf8(&mmap).map_err(|e| invalid_utf8(path, e))?;

        Ok(split_lines(content))
    }
}

impl Default for ReportReader {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_utf8(path: &Path, e: impl std::fmt::Display) -> ProcessingError {
    ProcessingError::InvalidFormat(format!("{} is not valid UTF-8: {}", path.display(), e))
}
