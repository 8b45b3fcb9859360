use crate::error::Result;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes merged lines, one per input line index.
pub struct ReportWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: usize,
}

impl ReportWriter<Box<dyn Write>> {
    /// Write to `path`, or to stdout when no path is given.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let sink: Box<dyn Write> = match path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                Box::new(File::create(path)?)
            }
            None => Box::new(io::stdout().lock()),
        };
        Ok(Self::new(sink))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, inner),
            lines_written: 0,
        }
    }

    /// Write one line. A newline is added unless the text already ends with
    /// one, as label lines copied verbatim from the input do.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lines_terminated_once() -> Result<()> {
        let mut writer = ReportWriter::new(Vec::new());
        writer.write_line("Running MPIR benchmark\n")?;
        writer.write_line("  Program add (weight 1.00)  => 1.5,2")?;
        writer.write_line("\n")?;

        assert_eq!(writer.lines_written(), 3);
        let output = String::from_utf8(writer.finish()?).unwrap();
        assert_eq!(
            output,
            "Running MPIR benchmark\n  Program add (weight 1.00)  => 1.5,2\n\n"
        );
        Ok(())
    }

    #[test]
    fn test_open_creates_output_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("merged").join("bench.txt");

        let mut writer = ReportWriter::open(Some(path.as_path()))?;
        writer.write_line("a  => 1")?;
        writer.finish()?;

        assert_eq!(std::fs::read_to_string(&path)?, "a  => 1\n");
        Ok(())
    }
}
